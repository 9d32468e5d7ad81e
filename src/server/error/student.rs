use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ApiResponseDto, server::validation::ValidationErrors};

#[derive(Error, Debug)]
pub enum StudentError {
    #[error("Student ID {0} not found")]
    NotFound(i32),
    #[error("Student submission failed validation: {0}")]
    Validation(ValidationErrors),
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(student_id) => {
                tracing::debug!(student_id = %student_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ApiResponseDto::failure("Student not found")),
                )
                    .into_response()
            }
            Self::Validation(errors) => {
                tracing::debug!("Student submission failed validation: {}", errors);

                // Validation failures are an expected outcome of a form post, the client
                // reads `success` rather than the status code.
                (
                    StatusCode::OK,
                    Json(ApiResponseDto {
                        success: false,
                        message: "Validation failed".to_string(),
                        errors: Some(errors.into_inner()),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationErrors> for StudentError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
