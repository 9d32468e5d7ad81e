//! Tests for the list_students endpoint.

use axum::http::StatusCode;
use satchel_test_utils::prelude::*;

use super::*;
use crate::util::test_utils::{get, send_json};

/// Expect the first page of ten, newest first
#[tokio::test]
async fn lists_first_page() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    for i in 1..=12 {
        test.student().insert_student(&format!("Child {}", i)).await?;
    }

    let (status, body) = send_json(test.router(), get("/api/students")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["last_page"], 2);
    assert_eq!(body["total"], 12);
    assert_eq!(body["next_page"], 2);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(10));
    assert_eq!(body["data"][0]["child_name"], "Child 12");

    Ok(())
}

/// Expect an unparsable page number to show the first page
#[tokio::test]
async fn treats_invalid_page_as_first() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    test.student().insert_student("Asha Rao").await?;

    let (status, body) = send_json(test.router(), get("/api/students?page=abc")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["data"][0]["child_name"], "Asha Rao");

    Ok(())
}

/// Expect a page number at the integer limit to answer an empty page
#[tokio::test]
async fn answers_empty_page_for_huge_page_number() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    test.student().insert_student("Asha Rao").await?;

    let (status, body) = send_json(
        test.router(),
        get("/api/students?page=18446744073709551615"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));

    Ok(())
}

/// Expect the search parameter to narrow the listing
#[tokio::test]
async fn filters_by_search() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    test.student().insert_student("Asha Rao").await?;
    test.student().insert_student("Ravi Kumar").await?;

    let (status, body) = send_json(test.router(), get("/api/students?search=Kumar")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["child_name"], "Ravi Kumar");

    Ok(())
}

/// Expect the OpenAPI document to describe the student endpoints
#[tokio::test]
async fn documents_endpoints() -> Result<(), TestError> {
    let test = test_setup_with_student_tables!()?;

    let (status, body) = send_json(test.router(), get("/api/docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    for path in [
        "/api/students",
        "/api/add-student",
        "/api/student/{id}",
        "/api/view-student/{id}",
        "/api/edit-student/{id}",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing {}", path);
    }

    Ok(())
}
