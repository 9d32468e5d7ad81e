//! Tests for the delete_student endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use satchel::server::controller::student::delete_student;
use satchel_test_utils::prelude::*;

use super::*;
use crate::util::test_utils::{delete, send_json};

/// Expect the student, its pickup persons and its photo to be removed
#[tokio::test]
async fn deletes_student() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    let (student, _) = test
        .student()
        .insert_student_with_pickup_persons("Asha Rao", 2)
        .await?;

    let (status, body) = send_json(
        test.router(),
        delete(&format!("/api/student/{}", student.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Student deleted successfully");
    assert!(test.student().pickup_persons_of(student.id).await?.is_empty());
    assert!(!test.photo_exists(&student.photo_path.unwrap()));

    Ok(())
}

/// Expect 404 from the handler for an unknown student
#[tokio::test]
async fn returns_not_found_for_unknown_student() -> Result<(), TestError> {
    let test = test_setup_with_student_tables!()?;

    let result = delete_student(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
