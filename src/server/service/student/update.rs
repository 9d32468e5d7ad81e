use dioxus_logger::tracing;
use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::{
    model::student::StudentDetailDto,
    server::{
        data::{pickup_person::PickupPersonRepository, student::StudentRepository},
        error::{student::StudentError, Error},
        model::{
            db::StudentModel,
            student::{PickupPersonChange, StudentFields, StudentForm, StudentUpdate},
        },
        service::student::{ensure_pickup_person_limit, StudentService},
        validation::{student::validate_student_update, ValidationErrors},
    },
};

impl<'a> StudentService<'a> {
    /// Updates a student, reconciling its pickup persons by id.
    ///
    /// The student row is locked for the duration of the transaction. A replacement photo is
    /// written before any row changes; the previous photo is only removed once the
    /// transaction has committed, and the replacement is removed if it does not.
    ///
    /// # Returns
    /// - `Ok(StudentDetailDto)` - The updated student with its remaining pickup persons
    /// - `Err(Error::StudentError(StudentError::Validation))` - Submission rejected or a
    ///   pickup person id does not belong to this student, nothing changed
    /// - `Err(Error::StudentError(StudentError::NotFound))` - No student with this ID
    /// - `Err(Error::StorageError)` - Replacement photo could not be written
    /// - `Err(Error::DbErr)` - Database operation failed, nothing changed
    pub async fn update_student(
        &self,
        student_id: i32,
        form: StudentForm,
    ) -> Result<StudentDetailDto, Error> {
        let StudentUpdate {
            fields,
            photo,
            pickup_persons,
        } = validate_student_update(form).map_err(StudentError::from)?;

        let txn = self.db.begin().await?;

        let student = StudentRepository::new(&txn)
            .find_for_update(student_id)
            .await?
            .ok_or(StudentError::NotFound(student_id))?;
        let previous_photo = student.photo_path.clone();

        let new_photo = match photo {
            Some(photo) => Some(self.store_photo(photo).await?),
            None => None,
        };

        let result = async {
            let student = self
                .apply_update(&txn, student, fields, new_photo.clone(), pickup_persons)
                .await?;

            txn.commit().await?;

            Ok::<_, Error>(student)
        }
        .await;

        match result {
            Ok(student) => {
                if let (Some(_), Some(previous_photo)) = (&new_photo, previous_photo) {
                    self.discard_photo(&previous_photo).await;
                }

                tracing::info!(student_id = %student_id, "Updated student");

                Ok(student)
            }
            Err(e) => {
                if let Some(new_photo) = new_photo {
                    self.discard_photo(&new_photo).await;
                }

                Err(e)
            }
        }
    }

    async fn apply_update(
        &self,
        txn: &DatabaseTransaction,
        student: StudentModel,
        fields: StudentFields,
        photo_path: Option<String>,
        changes: Vec<PickupPersonChange>,
    ) -> Result<StudentDetailDto, Error> {
        let student = StudentRepository::new(txn)
            .update(student, fields, photo_path)
            .await?;

        let pickup_person_repo = PickupPersonRepository::new(txn);

        let mut errors = ValidationErrors::new();
        for (index, change) in changes.into_iter().enumerate() {
            let matched = match change {
                PickupPersonChange::Remove { id } => {
                    pickup_person_repo.delete(student.id, id).await?.rows_affected > 0
                }
                PickupPersonChange::Update { id, fields } => pickup_person_repo
                    .update(student.id, id, fields)
                    .await?
                    .is_some(),
            };

            if !matched {
                let field = format!("pickupPersons.{}.id", index);
                errors.add(field.clone(), format!("The selected {} is invalid.", field));
            }
        }

        if !errors.is_empty() {
            return Err(StudentError::Validation(errors).into());
        }

        ensure_pickup_person_limit(txn, student.id).await?;

        let pickup_persons = pickup_person_repo.get_by_student(student.id).await?;

        Ok(StudentDetailDto::from((student, pickup_persons)))
    }
}
