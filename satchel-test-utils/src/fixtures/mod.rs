//! Fixtures for database rows, photo files and form payloads.
//!
//! - `photo` - Encoded PNG/JPEG images of a given size
//! - `student` - Student and pickup person rows

pub mod photo;
pub mod student;
