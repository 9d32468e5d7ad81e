//! Tests for the view_student endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::PickupRelation;
use satchel::server::controller::student::view_student;
use satchel_test_utils::prelude::*;

use super::*;
use crate::util::test_utils::{get, send, send_json};

/// Expect the student with its pickup persons in id order
#[tokio::test]
async fn returns_student_with_pickup_persons() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    let student = test.student().insert_student("Asha Rao").await?;
    test.student()
        .insert_pickup_person(student.id, "Ravi Rao", PickupRelation::Father)
        .await?;
    test.student()
        .insert_pickup_person(student.id, "Meera Rao", PickupRelation::Sister)
        .await?;

    let (status, body) = send_json(
        test.router(),
        get(&format!("/api/view-student/{}", student.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], student.id);
    assert_eq!(body["country"], "IN");
    assert_eq!(body["pickup_persons"][0]["relation"], "Father");
    assert_eq!(body["pickup_persons"][1]["name"], "Meera Rao");

    Ok(())
}

/// Expect 404 for an unknown student
#[tokio::test]
async fn returns_not_found_for_unknown_student() -> Result<(), TestError> {
    let test = test_setup_with_student_tables!()?;

    let result = view_student(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a non-numeric id to be rejected before reaching the handler
#[tokio::test]
async fn rejects_non_numeric_id() -> Result<(), TestError> {
    let test = test_setup_with_student_tables!()?;

    let (status, _) = send(test.router(), get("/api/view-student/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}
