//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same code runs against
//! the pool or inside a transaction opened by the service layer.

pub mod pickup_person;
pub mod student;

#[cfg(test)]
mod tests;
