use dioxus_logger::tracing;
use sea_orm::TransactionTrait;

use crate::{
    model::student::StudentDetailDto,
    server::{
        data::{pickup_person::PickupPersonRepository, student::StudentRepository},
        error::{student::StudentError, Error},
        model::student::{NewStudent, StudentForm},
        service::student::{ensure_pickup_person_limit, StudentService},
        validation::student::validate_new_student,
    },
};

impl<'a> StudentService<'a> {
    /// Creates a student with its photo and pickup persons.
    ///
    /// The photo is written first, then the student and every pickup person are inserted in
    /// one transaction. If the transaction fails the photo is removed again.
    ///
    /// # Returns
    /// - `Ok(StudentDetailDto)` - The stored student with its pickup persons
    /// - `Err(Error::StudentError(StudentError::Validation))` - Submission rejected, nothing stored
    /// - `Err(Error::StorageError)` - Photo could not be written
    /// - `Err(Error::DbErr)` - Database operation failed, nothing stored
    pub async fn create_student(&self, form: StudentForm) -> Result<StudentDetailDto, Error> {
        let NewStudent {
            fields,
            photo,
            pickup_persons,
        } = validate_new_student(form).map_err(StudentError::from)?;

        let photo_path = match photo {
            Some(photo) => Some(self.store_photo(photo).await?),
            None => None,
        };

        let result = async {
            let txn = self.db.begin().await?;

            let student = StudentRepository::new(&txn)
                .create(fields, photo_path.clone())
                .await?;
            let pickup_persons = PickupPersonRepository::new(&txn)
                .create_many(student.id, pickup_persons)
                .await?;

            ensure_pickup_person_limit(&txn, student.id).await?;

            txn.commit().await?;

            Ok::<_, Error>(StudentDetailDto::from((student, pickup_persons)))
        }
        .await;

        match result {
            Ok(student) => {
                tracing::info!(
                    student_id = %student.student.id,
                    "Created student with {} pickup persons",
                    student.pickup_persons.len()
                );

                Ok(student)
            }
            Err(e) => {
                if let Some(photo_path) = photo_path {
                    self.discard_photo(&photo_path).await;
                }

                Err(e)
            }
        }
    }
}
