//! Test utilities for Satchel.
//!
//! Tests describe the environment they need with [`TestBuilder`] and receive a
//! [`TestContext`] holding an in-memory SQLite database and a private media root. Fixture
//! helpers hang off the context (`test.student()`), image generators live in
//! [`fixtures::photo`].

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::photo::{jpeg_bytes, png_bytes},
        test_setup_with_student_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}

/// Builds a [`TestContext`] with the given entity tables.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Student)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Builds a [`TestContext`] with the `student` and `pickup_person` tables.
#[macro_export]
macro_rules! test_setup_with_student_tables {
    () => {{
        $crate::TestBuilder::new().with_student_tables().build().await
    }};
}
