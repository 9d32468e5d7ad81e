use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, storage::STUDENT_IMAGES_DIR};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Create the photo directory under the media root if it does not exist yet
pub async fn prepare_media_root(media_root: &Path) -> Result<(), Error> {
    tokio::fs::create_dir_all(media_root.join(STUDENT_IMAGES_DIR))
        .await
        .map_err(|e| Error::StorageError(e.into()))
}
