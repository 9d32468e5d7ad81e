use std::path::PathBuf;

use crate::server::error::config::ConfigError;

/// Media root used when `MEDIA_ROOT` is not set.
pub const DEFAULT_MEDIA_ROOT: &str = "storage";
/// Request body cap used when `MAX_UPLOAD_BYTES` is not set, 8 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    /// Directory holding `student-images/`
    pub media_root: PathBuf,
    /// Largest accepted request body in bytes
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from a variable lookup, blank values count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingEnvVar("DATABASE_URL"))?;

        let media_root = get("MEDIA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_ROOT));

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|source| ConfigError::InvalidUploadLimit { value, source })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            database_url,
            media_root,
            max_upload_bytes,
        })
    }
}
