//! Tests for the add_student endpoint.

use axum::{body::Body, http::{header, Request, StatusCode}};
use satchel_test_utils::prelude::*;

use super::*;
use crate::util::{multipart::MultipartBody, test_utils::send_json};

const FATHER: &str = r#"[{"name":"Ravi Rao","relation":"Father","contactNumber":"9876543210"}]"#;

/// Expect the reference submission to create a student, its pickup person and its photo
#[tokio::test]
async fn creates_student_from_form() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;

    let request = MultipartBody::new()
        .student_fields("Asha Rao")
        .file("photo", "asha.png", "image/png", &png_bytes(200, 200))
        .text("pickupPersons", FATHER)
        .into_request("/api/add-student");
    let (status, body) = send_json(test.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Student created successfully");
    assert!(body.get("errors").is_none());

    assert_eq!(test.student().count_students().await?, 1);
    assert_eq!(test.student().count_pickup_persons().await?, 1);

    let student = test.student().find_student(1).await?.unwrap();
    assert_eq!(student.child_name, "Asha Rao");
    assert!(test.photo_exists(&student.photo_path.unwrap()));

    Ok(())
}

/// Expect validation failures to answer 200 with every message
#[tokio::test]
async fn returns_validation_errors() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;

    let request = MultipartBody::new()
        .student_fields("Asha Rao")
        .text("country", "IND")
        .file("photo", "notes.png", "image/png", b"plain text")
        .text("pickupPersons", "[]")
        .into_request("/api/add-student");
    let (status, body) = send_json(test.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"]["country"][0], "The country field must be 2 characters.");
    assert_eq!(body["errors"]["photo"][0], "The photo field must be an image.");
    assert!(body["errors"]["pickupPersons"].is_array());

    assert_eq!(test.student().count_students().await?, 0);

    Ok(())
}

/// Expect a request that is not multipart to be rejected with 400
#[tokio::test]
async fn rejects_non_multipart_body() -> Result<(), TestError> {
    let test = test_setup_with_student_tables!()?;

    let request = Request::post("/api/add-student")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, _) = send_json(test.router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a database failure to answer 500 with a generic message
#[tokio::test]
async fn returns_internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let request = MultipartBody::new()
        .student_fields("Asha Rao")
        .file("photo", "asha.png", "image/png", &png_bytes(200, 200))
        .text("pickupPersons", FATHER)
        .into_request("/api/add-student");
    let (status, body) = send_json(test.router(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(std::fs::read_dir(test.media_root.join("student-images"))
        .map(|entries| entries.count() == 0)
        .unwrap_or(true));

    Ok(())
}
