pub mod multipart;
pub mod test_utils;
