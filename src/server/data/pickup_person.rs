use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{db::PickupPersonModel, student::PickupPersonFields};

/// Pickup person rows, always addressed through their owning student.
pub struct PickupPersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PickupPersonRepository<'a, C> {
    /// Creates a new instance of [`PickupPersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts pickup persons for a student in the given order.
    ///
    /// # Arguments
    /// - `student_id` - Owning student, which must already exist
    /// - `pickup_persons` - Validated columns for each new row
    ///
    /// # Returns
    /// - `Ok(Vec<PickupPersonModel>)` - The inserted rows in submission order
    /// - `Err(DbErr)` - Database operation failed, including an unknown `student_id`
    pub async fn create_many(
        &self,
        student_id: i32,
        pickup_persons: Vec<PickupPersonFields>,
    ) -> Result<Vec<PickupPersonModel>, DbErr> {
        let now = Utc::now().naive_utc();

        let mut created = Vec::with_capacity(pickup_persons.len());
        for person in pickup_persons {
            let person_am = entity::pickup_person::ActiveModel {
                student_id: ActiveValue::Set(student_id),
                name: ActiveValue::Set(person.name),
                relation: ActiveValue::Set(person.relation),
                contact_number: ActiveValue::Set(person.contact_number),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            };

            created.push(person_am.insert(self.db).await?);
        }

        Ok(created)
    }

    /// Fetches every pickup person of a student ordered by id.
    ///
    /// Returns an empty list for an unknown student.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<PickupPersonModel>, DbErr> {
        entity::prelude::PickupPerson::find()
            .filter(entity::pickup_person::Column::StudentId.eq(student_id))
            .order_by_asc(entity::pickup_person::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts the pickup persons owned by a student.
    pub async fn count_by_student(&self, student_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PickupPerson::find()
            .filter(entity::pickup_person::Column::StudentId.eq(student_id))
            .count(self.db)
            .await
    }

    /// Updates a pickup person owned by `student_id`.
    ///
    /// # Returns
    /// - `Ok(Some(PickupPersonModel))` - The updated row
    /// - `Ok(None)` - No pickup person with that id belongs to the student
    /// - `Err(DbErr)` - Database operation failed
    pub async fn update(
        &self,
        student_id: i32,
        pickup_person_id: i32,
        fields: PickupPersonFields,
    ) -> Result<Option<PickupPersonModel>, DbErr> {
        let person = match entity::prelude::PickupPerson::find_by_id(pickup_person_id)
            .filter(entity::pickup_person::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?
        {
            Some(person) => person,
            None => return Ok(None),
        };

        let mut person_am = person.into_active_model();
        person_am.name = ActiveValue::Set(fields.name);
        person_am.relation = ActiveValue::Set(fields.relation);
        person_am.contact_number = ActiveValue::Set(fields.contact_number);
        person_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(person_am.update(self.db).await?))
    }

    /// Deletes a pickup person owned by `student_id`.
    ///
    /// A pickup person belonging to another student is left alone, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(
        &self,
        student_id: i32,
        pickup_person_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::PickupPerson::delete_many()
            .filter(entity::pickup_person::Column::Id.eq(pickup_person_id))
            .filter(entity::pickup_person::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await
    }
}
