//! Service layer for business logic and orchestration.
//!
//! Services validate submissions, coordinate the repositories inside a transaction and keep
//! stored photos consistent with the rows that reference them.

pub mod student;
