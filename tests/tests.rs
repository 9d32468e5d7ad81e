#[cfg(feature = "server")]
mod controller;

#[cfg(feature = "server")]
mod migration;

#[cfg(feature = "server")]
mod util;

#[cfg(feature = "server")]
pub use util::test_utils::TestContextExt;
