use std::num::ParseIntError;

use thiserror::Error;

/// Startup configuration problems. These stop the server before it binds, so they never
/// reach a client.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("MAX_UPLOAD_BYTES must be a whole number of bytes, got {value:?}: {source}")]
    InvalidUploadLimit {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
