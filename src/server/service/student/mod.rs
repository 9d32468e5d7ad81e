//! Student records service.
//!
//! Coordinates validation, photo storage and the repositories for one request at a time.
//! Every database write happens inside a single transaction; photo files are not
//! transactional, so they are written before the rows that reference them and removed again
//! if the transaction does not commit.

mod create;
mod query;
mod update;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{pickup_person::PickupPersonRepository, student::StudentRepository},
    error::{student::StudentError, Error},
    model::student::ValidatedPhoto,
    storage::PhotoStorage,
    validation::{student::MAX_PICKUP_PERSONS, ValidationErrors},
};

/// Number of students per listing page.
pub const STUDENTS_PER_PAGE: u64 = 10;

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
    photos: &'a PhotoStorage,
}

impl<'a> StudentService<'a> {
    /// Creates a new instance of [`StudentService`]
    pub fn new(db: &'a DatabaseConnection, photos: &'a PhotoStorage) -> Self {
        Self { db, photos }
    }

    /// Deletes a student and its pickup persons, then removes the photo file.
    ///
    /// # Returns
    /// - `Ok(())` - Student deleted
    /// - `Err(Error::StudentError(StudentError::NotFound))` - No student with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_student(&self, student_id: i32) -> Result<(), Error> {
        let student_repo = StudentRepository::new(self.db);

        let student = student_repo
            .find(student_id)
            .await?
            .ok_or(StudentError::NotFound(student_id))?;

        let result = student_repo.delete(student_id).await?;
        if result.rows_affected == 0 {
            return Err(StudentError::NotFound(student_id).into());
        }

        if let Some(photo_path) = student.photo_path {
            self.discard_photo(&photo_path).await;
        }

        tracing::info!(student_id = %student_id, "Deleted student");

        Ok(())
    }

    /// Writes a validated photo under a fresh filename.
    async fn store_photo(&self, photo: ValidatedPhoto) -> Result<String, Error> {
        let filename = self.photos.store(&photo.bytes, &photo.extension).await?;

        tracing::debug!(
            "Stored {}x{} photo as {} ({} bytes)",
            photo.width,
            photo.height,
            filename,
            photo.bytes.len()
        );

        Ok(filename)
    }

    /// Removes a photo file that is no longer referenced. Failures are logged only, the
    /// database is already consistent at this point.
    async fn discard_photo(&self, filename: &str) {
        match self.photos.delete(filename).await {
            Ok(true) => tracing::debug!("Removed photo {}", filename),
            Ok(false) => tracing::warn!("Photo {} was already missing", filename),
            Err(e) => tracing::warn!("Failed to remove photo {}: {}", filename, e),
        }
    }
}

/// Fails when a student owns more pickup persons than allowed.
async fn ensure_pickup_person_limit<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
) -> Result<(), Error> {
    let count = PickupPersonRepository::new(db)
        .count_by_student(student_id)
        .await?;

    if count > MAX_PICKUP_PERSONS as u64 {
        let mut errors = ValidationErrors::new();
        errors.add(
            "pickupPersons",
            format!(
                "A student may not have more than {} pickup persons.",
                MAX_PICKUP_PERSONS
            ),
        );
        return Err(StudentError::Validation(errors).into());
    }

    Ok(())
}
