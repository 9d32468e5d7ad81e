//! Declarative test builder.
//!
//! Tables are queued on the builder and created when [`TestBuilder::build`] runs, so a test
//! states its schema up front and receives a ready [`TestContext`].

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add both student tables, parent first so the foreign key resolves.
    pub fn with_student_tables(self) -> Self {
        self.with_table(entity::prelude::Student)
            .with_table(entity::prelude::PickupPerson)
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in call order.
    ///
    /// ```no_run
    /// use satchel_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), satchel_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Student)
    ///     .with_table(PickupPerson)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connect to a fresh in-memory database, create the queued tables and prepare an empty
    /// media root.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        for stmt in &self.tables {
            context.db.execute(stmt).await?;
        }

        Ok(context)
    }
}
