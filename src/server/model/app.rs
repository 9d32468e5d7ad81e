use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::storage::PhotoStorage;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub photos: PhotoStorage,
}

impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, media_root): (DatabaseConnection, PathBuf)) -> Self {
        Self {
            db,
            photos: PhotoStorage::new(media_root),
        }
    }
}
