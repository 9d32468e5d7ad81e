//! Server application models and type definitions.
//!
//! Application state, database model aliases and the typed records that flow between the
//! validation layer, the write orchestrator and the repositories.

pub mod app;
pub mod db;
pub mod student;
