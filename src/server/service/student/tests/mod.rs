use satchel_test_utils::TestContext;
use serde_json::json;

use crate::server::{
    error::{student::StudentError, Error},
    model::student::{PhotoUpload, StudentForm},
    storage::PhotoStorage,
};


fn photo_storage(test: &TestContext) -> PhotoStorage {
    PhotoStorage::new(test.media_root.clone())
}

fn png_upload(bytes: Vec<u8>) -> Option<PhotoUpload> {
    Some(PhotoUpload {
        file_name: Some("photo.png".to_string()),
        bytes,
    })
}

/// A complete submission for "Asha Rao" with the given photo and pickup persons.
fn student_form(photo: Option<PhotoUpload>, pickup_persons: serde_json::Value) -> StudentForm {
    StudentForm {
        child_name: Some("Asha Rao".to_string()),
        date_of_birth: Some("2019-06-15".to_string()),
        class: Some("Nursery".to_string()),
        address: Some("21 Park Street".to_string()),
        city: Some("Kolkata".to_string()),
        state: Some("West Bengal".to_string()),
        country: Some("IN".to_string()),
        zip_code: Some("7000160".to_string()),
        photo,
        pickup_persons: Some(pickup_persons.to_string()),
    }
}

fn father() -> serde_json::Value {
    json!([{ "name": "Ravi Rao", "relation": "Father", "contactNumber": "9876543210" }])
}

fn pickup_persons(count: usize) -> serde_json::Value {
    serde_json::Value::Array(
        (1..=count)
            .map(|i| {
                json!({
                    "name": format!("Person {}", i),
                    "relation": "Mother",
                    "contactNumber": "9876543210",
                })
            })
            .collect(),
    )
}

/// Filenames currently in the context's student-images directory.
fn stored_photos(test: &TestContext) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(test.media_root.join("student-images"))
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

fn validation_errors(result: Result<impl std::fmt::Debug, Error>) -> crate::server::validation::ValidationErrors {
    match result {
        Err(Error::StudentError(StudentError::Validation(errors))) => errors,
        other => panic!("expected validation failure, got {:?}", other),
    }
}
