//! Tests for student controller endpoints.

mod add_student;
mod delete_student;
mod edit_student;
mod list_students;
mod view_student;

use super::*;
