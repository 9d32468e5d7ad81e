//! Declarative validation of incoming student submissions.
//!
//! Raw form input is checked field by field and every failure is collected into
//! [`ValidationErrors`] rather than stopping at the first problem, so a form can show all of
//! them at once. A submission either becomes a fully typed record or nothing at all.

pub mod photo;
pub mod rules;
pub mod student;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

/// Validation messages keyed by field name, e.g. `childName` or `pickupPersons.0.relation`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field, keeping earlier messages for the same field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// Returns `value` when no errors were recorded.
    ///
    /// The value is only produced by the caller once every field parsed, so `None` with an
    /// empty error set would be a bug in the validator.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.is_empty() => Ok(value),
            _ => Err(self),
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}
