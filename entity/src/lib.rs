//! SeaORM entities for the Satchel database schema.

pub mod prelude;

pub mod pickup_person;
pub mod sea_orm_active_enums;
pub mod student;
