//! Tests for serving stored photos.

use axum::http::{header, StatusCode};
use satchel_test_utils::prelude::*;
use tower::ServiceExt;

use super::*;
use crate::util::test_utils::{get, send};

/// Expect a stored photo to be served with an image content type
#[tokio::test]
async fn serves_stored_photo() -> Result<(), TestError> {
    let mut test = test_setup_with_student_tables!()?;
    let student = test.student().insert_student_with_photo("Asha Rao").await?;
    let photo_path = student.photo_path.unwrap();

    let response = test
        .router()
        .oneshot(get(&format!("/storage/student-images/{}", photo_path)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );

    let (_, body) = send(
        test.router(),
        get(&format!("/storage/student-images/{}", photo_path)),
    )
    .await;
    assert_eq!(body, std::fs::read(test.photo_path(&photo_path)).unwrap());

    Ok(())
}

/// Expect 404 for a missing photo
#[tokio::test]
async fn returns_not_found_for_missing_photo() -> Result<(), TestError> {
    let test = test_setup_with_student_tables!()?;

    let (status, _) = send(test.router(), get("/storage/student-images/missing.png")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 for a filename that would leave the photo directory
#[tokio::test]
async fn refuses_path_traversal() -> Result<(), TestError> {
    let test = test_setup_with_student_tables!()?;

    let (status, _) = send(
        test.router(),
        get("/storage/student-images/..%2F..%2Fsecret.png"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
