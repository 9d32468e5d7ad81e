//! HTTP controller endpoints for the Satchel web API.
//!
//! Axum handlers for student records and stored photos. Handlers parse request input,
//! call into the service layer and return JSON responses; every endpoint under `/api` is
//! documented with utoipa.

pub mod media;
pub mod student;
