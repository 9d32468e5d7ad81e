//! Server application core modules.
//!
//! Everything behind the `server` feature: configuration, the HTTP API, validation of
//! student submissions, photo storage and database access.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
pub mod validation;
