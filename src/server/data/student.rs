use chrono::Utc;
use sea_orm::{
    sea_query::{Condition, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, ItemsAndPagesNumber, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{db::StudentModel, student::StudentFields};

/// Character escaping `%`, `_` and itself inside a search pattern.
const LIKE_ESCAPE: char = '\\';

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a student with both timestamps set to now.
    ///
    /// # Arguments
    /// - `fields` - Validated student columns
    /// - `photo_path` - Filename of the already stored photo, if any
    ///
    /// # Returns
    /// - `Ok(StudentModel)` - The inserted row including its generated id
    /// - `Err(DbErr)` - Database operation failed
    pub async fn create(
        &self,
        fields: StudentFields,
        photo_path: Option<String>,
    ) -> Result<StudentModel, DbErr> {
        let now = Utc::now().naive_utc();

        let student = entity::student::ActiveModel {
            child_name: ActiveValue::Set(fields.child_name),
            date_of_birth: ActiveValue::Set(fields.date_of_birth),
            class: ActiveValue::Set(fields.class),
            address: ActiveValue::Set(fields.address),
            city: ActiveValue::Set(fields.city),
            state: ActiveValue::Set(fields.state),
            country: ActiveValue::Set(fields.country),
            zip_code: ActiveValue::Set(fields.zip_code),
            photo_path: ActiveValue::Set(photo_path),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        student.insert(self.db).await
    }

    /// Fetches a student by id.
    ///
    /// # Returns
    /// - `Ok(Some(StudentModel))` - Student exists
    /// - `Ok(None)` - No student with this id
    /// - `Err(DbErr)` - Database operation failed
    pub async fn find(&self, student_id: i32) -> Result<Option<StudentModel>, DbErr> {
        entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await
    }

    /// Fetches a student and takes an exclusive lock on its row until the surrounding
    /// transaction ends.
    ///
    /// Backends without row locks (SQLite) ignore the lock clause.
    pub async fn find_for_update(&self, student_id: i32) -> Result<Option<StudentModel>, DbErr> {
        entity::prelude::Student::find_by_id(student_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Overwrites the scalar columns of an existing student.
    ///
    /// `photo_path` replaces the stored filename only when `Some`.
    pub async fn update(
        &self,
        student: StudentModel,
        fields: StudentFields,
        photo_path: Option<String>,
    ) -> Result<StudentModel, DbErr> {
        let mut student_am = student.into_active_model();
        student_am.child_name = ActiveValue::Set(fields.child_name);
        student_am.date_of_birth = ActiveValue::Set(fields.date_of_birth);
        student_am.class = ActiveValue::Set(fields.class);
        student_am.address = ActiveValue::Set(fields.address);
        student_am.city = ActiveValue::Set(fields.city);
        student_am.state = ActiveValue::Set(fields.state);
        student_am.country = ActiveValue::Set(fields.country);
        student_am.zip_code = ActiveValue::Set(fields.zip_code);
        if let Some(photo_path) = photo_path {
            student_am.photo_path = ActiveValue::Set(Some(photo_path));
        }
        student_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        student_am.update(self.db).await
    }

    /// Deletes a student, pickup persons are removed by the foreign key cascade.
    ///
    /// Returns OK regardless of the student existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, student_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Student::delete_by_id(student_id)
            .exec(self.db)
            .await
    }

    /// Fetches one page of students, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index; pages past the end come back empty without a query
    /// - `per_page` - Page size
    /// - `search` - Literal substring of the child name or class, `%` and `_` match themselves
    ///
    /// # Returns
    /// - `Ok((Vec<StudentModel>, ItemsAndPagesNumber))` - The page and the filtered totals
    /// - `Err(DbErr)` - Database operation failed
    pub async fn paginate(
        &self,
        page: u64,
        per_page: u64,
        search: Option<&str>,
    ) -> Result<(Vec<StudentModel>, ItemsAndPagesNumber), DbErr> {
        let mut query = entity::prelude::Student::find();
        if let Some(search) = search {
            let pattern = contains_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(
                        entity::student::Column::ChildName
                            .like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)),
                    )
                    .add(
                        entity::student::Column::Class
                            .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
                    ),
            );
        }

        let paginator = query
            .order_by_desc(entity::student::Column::CreatedAt)
            .order_by_desc(entity::student::Column::Id)
            .paginate(self.db, per_page);

        let totals = paginator.num_items_and_pages().await?;
        if page >= totals.number_of_pages {
            return Ok((Vec::new(), totals));
        }
        let students = paginator.fetch_page(page).await?;

        Ok((students, totals))
    }
}

/// `LIKE` pattern matching `search` anywhere, with wildcards in `search` escaped.
fn contains_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
