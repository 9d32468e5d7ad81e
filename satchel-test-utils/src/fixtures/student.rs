use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::PickupRelation;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::{context::TestContext, error::TestError, fixtures::photo::png_bytes};

impl TestContext {
    pub fn student<'a>(&'a mut self) -> StudentFixtures<'a> {
        StudentFixtures { context: self }
    }
}

pub struct StudentFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> StudentFixtures<'a> {
    /// Inserts a student with fixed address details and no photo.
    pub async fn insert_student(
        &self,
        child_name: &str,
    ) -> Result<entity::student::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Student::insert(entity::student::ActiveModel {
                child_name: ActiveValue::Set(child_name.to_string()),
                date_of_birth: ActiveValue::Set(
                    NaiveDate::from_ymd_opt(2019, 4, 12).expect("valid date"),
                ),
                class: ActiveValue::Set("Nursery".to_string()),
                address: ActiveValue::Set("12 MG Road".to_string()),
                city: ActiveValue::Set("Pune".to_string()),
                state: ActiveValue::Set("Maharashtra".to_string()),
                country: ActiveValue::Set("IN".to_string()),
                zip_code: ActiveValue::Set("4110010".to_string()),
                photo_path: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Inserts a student whose photo is a real 200x200 PNG under the media root.
    pub async fn insert_student_with_photo(
        &self,
        child_name: &str,
    ) -> Result<entity::student::Model, TestError> {
        let student = self.insert_student(child_name).await?;

        let filename = format!("fixture-{}.png", student.id);
        let dir = self.context.media_root.join("student-images");
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&filename), png_bytes(200, 200)).await?;

        Ok(
            entity::prelude::Student::update(entity::student::ActiveModel {
                id: ActiveValue::Unchanged(student.id),
                photo_path: ActiveValue::Set(Some(filename)),
                ..Default::default()
            })
            .exec(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_pickup_person(
        &self,
        student_id: i32,
        name: &str,
        relation: PickupRelation,
    ) -> Result<entity::pickup_person::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::PickupPerson::insert(entity::pickup_person::ActiveModel {
                student_id: ActiveValue::Set(student_id),
                name: ActiveValue::Set(name.to_string()),
                relation: ActiveValue::Set(relation),
                contact_number: ActiveValue::Set("9876543210".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Inserts a student with a photo and `count` pickup persons named `Person 1..=count`.
    pub async fn insert_student_with_pickup_persons(
        &self,
        child_name: &str,
        count: usize,
    ) -> Result<(entity::student::Model, Vec<entity::pickup_person::Model>), TestError> {
        let student = self.insert_student_with_photo(child_name).await?;

        let mut pickup_persons = Vec::with_capacity(count);
        for i in 1..=count {
            let person = self
                .insert_pickup_person(student.id, &format!("Person {}", i), PickupRelation::Mother)
                .await?;
            pickup_persons.push(person);
        }

        Ok((student, pickup_persons))
    }

    pub async fn find_student(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::student::Model>, TestError> {
        Ok(entity::prelude::Student::find_by_id(student_id)
            .one(&self.context.db)
            .await?)
    }

    /// Pickup persons owned by a student, ordered by id.
    pub async fn pickup_persons_of(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::pickup_person::Model>, TestError> {
        Ok(entity::prelude::PickupPerson::find()
            .filter(entity::pickup_person::Column::StudentId.eq(student_id))
            .order_by_asc(entity::pickup_person::Column::Id)
            .all(&self.context.db)
            .await?)
    }

    pub async fn count_students(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Student::find()
            .count(&self.context.db)
            .await?)
    }

    pub async fn count_pickup_persons(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::PickupPerson::find()
            .count(&self.context.db)
            .await?)
    }
}

/// JSON for one create-style pickup person entry.
pub fn pickup_person_json(name: &str, relation: &str, contact_number: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "relation": relation,
        "contactNumber": contact_number,
    })
}
