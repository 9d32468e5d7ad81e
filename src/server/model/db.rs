//! Database model type aliases.
//!
//! Short names for the SeaORM models from the `entity` crate.

/// A child record (`entity::student::Model`).
///
/// # Fields
/// - `id` - Primary key
/// - `child_name`, `date_of_birth`, `class` - Identifying information
/// - `address`, `city`, `state`, `country`, `zip_code` - Home address
/// - `photo_path` - Filename under the student-images directory, if a photo is stored
/// - `created_at` / `updated_at` - Row timestamps
pub type StudentModel = entity::student::Model;

/// A person allowed to collect a student (`entity::pickup_person::Model`).
///
/// Each row is owned by exactly one student and is removed with it.
pub type PickupPersonModel = entity::pickup_person::Model;
