//! Tests for the HTTP endpoints.
//!
//! Handlers are called directly where the request has no body, multipart endpoints are
//! driven through the full router.

mod media;
mod student;

use super::*;
