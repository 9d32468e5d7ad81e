//! Photo storage on the local filesystem.
//!
//! Photos live in `<media root>/student-images/` and are referenced from the database by
//! filename only. Files are never overwritten, a replacement photo is always a new file.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use tokio::{fs, io::AsyncWriteExt};

use crate::server::error::storage::StorageError;

/// Subdirectory of the media root holding student photos.
pub const STUDENT_IMAGES_DIR: &str = "student-images";

#[derive(Clone, Debug)]
pub struct PhotoStorage {
    root: PathBuf,
}

impl PhotoStorage {
    pub fn new(media_root: impl Into<PathBuf>) -> Self {
        Self {
            root: media_root.into(),
        }
    }

    /// Directory photos are written to.
    pub fn dir(&self) -> PathBuf {
        self.root.join(STUDENT_IMAGES_DIR)
    }

    /// Full path of a stored photo.
    ///
    /// # Errors
    /// - [`StorageError::InvalidFilename`] - The name is empty, a relative component or
    ///   contains a path separator
    pub fn path(&self, filename: &str) -> Result<PathBuf, StorageError> {
        validate_filename(filename)?;

        Ok(self.dir().join(filename))
    }

    /// Writes a new photo and returns the generated filename.
    ///
    /// Filenames are `<unix nanos>-<16 hex digits>.<extension>`. The file is opened with
    /// create-new semantics so an existing photo can never be clobbered.
    pub async fn store(&self, bytes: &[u8], extension: &str) -> Result<String, StorageError> {
        let dir = self.dir();
        fs::create_dir_all(&dir).await?;

        let filename = generate_filename(extension);
        validate_filename(&filename)?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dir.join(&filename))
            .await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        Ok(filename)
    }

    /// Removes a photo, returning `false` if it was already gone.
    pub async fn delete(&self, filename: &str) -> Result<bool, StorageError> {
        let path = self.path(filename)?;

        match fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads a stored photo, `None` if no such file exists.
    pub async fn read(&self, filename: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path(filename)?;

        match fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn exists(&self, filename: &str) -> Result<bool, StorageError> {
        let path = self.path(filename)?;

        Ok(fs::try_exists(path).await?)
    }
}

fn validate_filename(filename: &str) -> Result<(), StorageError> {
    let single_component = Path::new(filename)
        .file_name()
        .is_some_and(|name| name == filename);

    if filename.is_empty()
        || filename.contains(['/', '\\'])
        || filename.contains("..")
        || !single_component
    {
        return Err(StorageError::InvalidFilename(filename.to_string()));
    }

    Ok(())
}

fn generate_filename(extension: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    format!("{}-{:016x}.{}", nanos, rand::random::<u64>(), extension)
}

/// Content type for a stored photo, derived from its extension.
pub fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}
