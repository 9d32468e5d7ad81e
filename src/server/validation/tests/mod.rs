use satchel_test_utils::prelude::*;
use serde_json::json;

use crate::server::model::student::{PhotoUpload, StudentForm};


fn photo(bytes: Vec<u8>) -> Option<PhotoUpload> {
    Some(PhotoUpload {
        file_name: Some("asha.png".to_string()),
        bytes,
    })
}

fn form(pickup_persons: serde_json::Value) -> StudentForm {
    StudentForm {
        child_name: Some("Asha Rao".to_string()),
        date_of_birth: Some("2019-06-15".to_string()),
        class: Some("Nursery".to_string()),
        address: Some("21 Park Street".to_string()),
        city: Some("Kolkata".to_string()),
        state: Some("West Bengal".to_string()),
        country: Some("IN".to_string()),
        zip_code: Some("7000160".to_string()),
        photo: photo(png_bytes(200, 200)),
        pickup_persons: Some(pickup_persons.to_string()),
    }
}

fn father() -> serde_json::Value {
    json!({ "name": "Ravi Rao", "relation": "Father", "contactNumber": "9876543210" })
}

fn messages(errors: &crate::server::validation::ValidationErrors, field: &str) -> Vec<String> {
    errors.get(field).map(<[String]>::to_vec).unwrap_or_default()
}
