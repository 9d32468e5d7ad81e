use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Filenames must be a single path component, anything else could escape the media root.
    #[error("Refusing to access photo with invalid filename: {0:?}")]
    InvalidFilename(String),
    #[error("Photo storage IO error: {0}")]
    Io(#[from] std::io::Error),
}
