//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// A running test environment.
///
/// The media root is a directory unique to this context under the system temp dir. It is
/// removed when the context is dropped.
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Directory photos are stored under
    pub media_root: PathBuf,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let media_root = std::env::temp_dir().join(format!(
            "satchel-test-{}-{:016x}",
            nanos,
            rand::random::<u64>()
        ));
        tokio::fs::create_dir_all(&media_root).await?;

        Ok(Self { db, media_root })
    }

    /// Convert the database and media root into any type constructible from them.
    ///
    /// Avoids a circular dependency between this crate and the main satchel crate.
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.db.clone(), self.media_root.clone()))
    }

    /// Path a stored photo would have under this context's media root.
    pub fn photo_path(&self, filename: &str) -> PathBuf {
        self.media_root.join("student-images").join(filename)
    }

    /// Whether a photo file with this name exists under the media root.
    pub fn photo_exists(&self, filename: &str) -> bool {
        self.photo_path(filename).is_file()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.media_root);
    }
}
