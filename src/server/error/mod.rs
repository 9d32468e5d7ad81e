//! Error types for the Satchel server application.
//!
//! Each domain (configuration, student records, photo storage) has its own error enum which is
//! aggregated into [`Error`]. All errors implement `IntoResponse` so handlers can return them
//! with `?`, and anything without a specific mapping becomes a logged 500 that does not leak
//! internals to the client.

pub mod config;
pub mod storage;
pub mod student;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ApiResponseDto,
    server::error::{config::ConfigError, storage::StorageError, student::StudentError},
};

/// Main error type for the Satchel server application.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying errors convert via `?`.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Student errors (validation failure, unknown student)
/// - Storage errors (photo file IO)
/// - Malformed multipart submissions
/// - Database errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Student record error (validation failure, student not found).
    #[error(transparent)]
    StudentError(#[from] StudentError),
    /// Photo storage error (filesystem IO, rejected filename).
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// The request body could not be read as `multipart/form-data`.
    #[error(transparent)]
    MultipartError(#[from] MultipartError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 200 OK with `success: false` - Validation failures, so forms can render every message
/// - 400 Bad Request - Malformed multipart body
/// - 404 Not Found - Unknown student
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::StudentError(err) => err.into_response(),
            Self::MultipartError(err) => {
                tracing::debug!("Rejected malformed multipart body: {}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponseDto::failure("The submitted form could not be read.")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponseDto::failure(
                "An error occurred while processing your request. Please try again.",
            )),
        )
            .into_response()
    }
}
