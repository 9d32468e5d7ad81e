//! Tests for the edit_student and update_student endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use satchel::server::controller::student::edit_student;
use satchel_test_utils::prelude::*;

use super::*;
use crate::util::{multipart::MultipartBody, test_utils::send_json};

/// Expect the edit payload to carry the student and its pickup persons
#[tokio::test]
async fn returns_student_for_edit_form() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    let (student, _) = test
        .student()
        .insert_student_with_pickup_persons("Asha Rao", 2)
        .await?;

    let (status, body) = send_json(
        test.router(),
        crate::util::test_utils::get(&format!("/api/edit-student/{}", student.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["child_name"], "Asha Rao");
    assert_eq!(body["pickup_persons"].as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 404 from the handler for an unknown student
#[tokio::test]
async fn edit_form_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_student_tables!()?;

    let result = edit_student(State(test.into_app_state()), Path(9)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a new photo and a removed pickup person to be applied
#[tokio::test]
async fn updates_student_with_new_photo() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    let (student, persons) = test
        .student()
        .insert_student_with_pickup_persons("Old Name", 2)
        .await?;
    let old_photo = student.photo_path.clone().unwrap();

    let entries = format!(
        r#"[{{"id":{},"name":"Ravi Rao","relation":"Father","contactNumber":"9876543210"}},{{"id":{},"remove":true}}]"#,
        persons[0].id, persons[1].id
    );
    let request = MultipartBody::new()
        .student_fields("Asha Rao")
        .file("photo", "asha.jpg", "image/jpeg", &jpeg_bytes(300, 200))
        .text("pickupPersons", &entries)
        .into_request(&format!("/api/edit-student/{}", student.id));
    let (status, body) = send_json(test.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Student updated successfully");

    let updated = test.student().find_student(student.id).await?.unwrap();
    let new_photo = updated.photo_path.unwrap();
    assert_eq!(updated.child_name, "Asha Rao");
    assert!(new_photo.ends_with(".jpg"));
    assert!(test.photo_exists(&new_photo));
    assert!(!test.photo_exists(&old_photo));

    let remaining = test.student().pickup_persons_of(student.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Ravi Rao");

    Ok(())
}

/// Expect a `null` photo field to keep the stored photo
#[tokio::test]
async fn keeps_photo_for_null_field() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    let (student, persons) = test
        .student()
        .insert_student_with_pickup_persons("Asha Rao", 1)
        .await?;

    let entries = format!(
        r#"[{{"id":"{}","name":"Person 1","relation":"Mother","contactNumber":"9876543210"}}]"#,
        persons[0].id
    );
    let request = MultipartBody::new()
        .student_fields("Asha Rao")
        .text("photo", "null")
        .text("pickupPersons", &entries)
        .into_request(&format!("/api/edit-student/{}", student.id));
    let (status, body) = send_json(test.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let updated = test.student().find_student(student.id).await?.unwrap();
    assert_eq!(updated.photo_path, student.photo_path);
    assert!(test.photo_exists(&student.photo_path.unwrap()));

    Ok(())
}

/// Expect 404 when updating an unknown student
#[tokio::test]
async fn update_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_student_tables!()?;

    let request = MultipartBody::new()
        .student_fields("Asha Rao")
        .text("pickupPersons", r#"[{"id":1,"remove":true}]"#)
        .into_request("/api/edit-student/5");
    let (status, body) = send_json(test.router(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Student not found");

    Ok(())
}

/// Expect an id belonging to another student to fail validation
#[tokio::test]
async fn rejects_foreign_pickup_person() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    let (student, _) = test
        .student()
        .insert_student_with_pickup_persons("Asha Rao", 1)
        .await?;
    let (_, others) = test
        .student()
        .insert_student_with_pickup_persons("Ravi Kumar", 1)
        .await?;

    let entries = format!(r#"[{{"id":{},"remove":"1"}}]"#, others[0].id);
    let request = MultipartBody::new()
        .student_fields("Changed")
        .text("pickupPersons", &entries)
        .into_request(&format!("/api/edit-student/{}", student.id));
    let (status, body) = send_json(test.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["errors"]["pickupPersons.0.id"][0],
        "The selected pickupPersons.0.id is invalid."
    );
    assert_eq!(test.student().count_pickup_persons().await?, 2);

    Ok(())
}
