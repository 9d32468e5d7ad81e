//! Reusable per-field rules.
//!
//! A [`Field`] wraps one raw input value and applies rules in order, stopping at the first
//! failure for that field. Messages use the field's human label, so `zipCode` reports as
//! "zip code".

use chrono::NaiveDate;

use super::ValidationErrors;

pub struct Field<'a> {
    errors: &'a mut ValidationErrors,
    name: String,
    label: String,
    value: Option<String>,
    failed: bool,
}

impl<'a> Field<'a> {
    /// Wraps a raw value; surrounding whitespace is trimmed and an empty string is treated as
    /// absent.
    pub fn new(errors: &'a mut ValidationErrors, name: impl Into<String>, raw: Option<&str>) -> Self {
        let name = name.into();
        let label = label_for(&name);
        let value = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        Self {
            errors,
            name,
            label,
            value,
            failed: false,
        }
    }

    fn fail(&mut self, message: String) {
        if !self.failed {
            self.errors.add(self.name.clone(), message);
            self.failed = true;
        }
    }

    fn check(mut self, rule: impl FnOnce(&str) -> bool, message: impl FnOnce(&str) -> String) -> Self {
        if self.failed {
            return self;
        }
        if let Some(value) = self.value.as_deref() {
            if !rule(value) {
                let message = message(&self.label);
                self.fail(message);
            }
        }
        self
    }

    pub fn required(mut self) -> Self {
        if self.value.is_none() {
            let message = format!("The {} field is required.", self.label);
            self.fail(message);
        }
        self
    }

    pub fn max_chars(self, max: usize) -> Self {
        self.check(
            |v| v.chars().count() <= max,
            |label| format!("The {} field must not be greater than {} characters.", label, max),
        )
    }

    pub fn exact_chars(self, len: usize) -> Self {
        self.check(
            |v| v.chars().count() == len,
            |label| format!("The {} field must be {} characters.", label, len),
        )
    }

    /// Finishes the field, yielding its value only when every rule passed.
    pub fn value(self) -> Option<String> {
        if self.failed {
            None
        } else {
            self.value
        }
    }

    /// Finishes the field as a `YYYY-MM-DD` calendar date.
    pub fn date(mut self) -> Option<NaiveDate> {
        if self.failed {
            return None;
        }
        let value = self.value.take()?;
        match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                let message = format!("The {} field must be a valid date.", self.label);
                self.fail(message);
                None
            }
        }
    }

    /// Finishes the field by mapping it onto one of a fixed set of values.
    pub fn one_of<T>(mut self, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        if self.failed {
            return None;
        }
        let value = self.value.take()?;
        match parse(&value) {
            Some(parsed) => Some(parsed),
            None => {
                let message = format!("The selected {} is invalid.", self.label);
                self.fail(message);
                None
            }
        }
    }
}

/// Human label for a field name.
///
/// Top level camelCase names become lowercase words (`dateOfBirth` -> `date of birth`), nested
/// paths such as `pickupPersons.2.name` are kept verbatim so the index stays visible.
pub fn label_for(name: &str) -> String {
    if name.contains('.') {
        return name.to_string();
    }

    let mut label = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            label.push(' ');
            label.extend(c.to_lowercase());
        } else {
            label.push(c);
        }
    }
    label
}
