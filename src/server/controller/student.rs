use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::{
        api::ApiResponseDto,
        student::{StudentDetailDto, StudentPageDto},
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            student::{PhotoUpload, StudentForm},
        },
        service::student::StudentService,
    },
};

pub static STUDENT_TAG: &str = "student";

/// Query parameters for the student listing
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentListParams {
    /// 1-based page number, invalid or missing values show the first page
    pub page: Option<String>,
    /// Filters by a substring of the child name or class
    pub search: Option<String>,
}

/// Multipart form accepted by the create and update endpoints
///
/// `pickupPersons` is a JSON-encoded array. On update every entry carries the `id` of an
/// existing pickup person and may set `remove` to delete it.
#[allow(dead_code)]
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StudentMultipartForm {
    child_name: String,
    /// `YYYY-MM-DD`
    date_of_birth: String,
    class: String,
    address: String,
    city: String,
    state: String,
    /// Exactly 2 characters
    country: String,
    /// Exactly 7 characters
    zip_code: String,
    /// JPEG or PNG file, at most 1024 KB and at least 100x100 pixels. Optional on update.
    #[schema(value_type = Option<String>)]
    photo: Option<Vec<u8>>,
    /// e.g. `[{"name":"Ravi Rao","relation":"Father","contactNumber":"9876543210"}]`
    pickup_persons: String,
}

/// List students, newest first
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(StudentListParams),
    responses(
        (status = 200, description = "One page of students", body = StudentPageDto),
        (status = 500, description = "Internal server error", body = ApiResponseDto)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<StudentListParams>,
) -> Result<impl IntoResponse, Error> {
    let page = params
        .page
        .as_deref()
        .and_then(|p| p.trim().parse::<u64>().ok())
        .unwrap_or(1);

    let student_service = StudentService::new(&state.db, &state.photos);
    let students = student_service
        .list_students(page, params.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(students)))
}

/// Create a student with a photo and pickup persons
#[utoipa::path(
    post,
    path = "/api/add-student",
    tag = STUDENT_TAG,
    request_body(content = StudentMultipartForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Student created, or validation failed with `success: false`", body = ApiResponseDto),
        (status = 400, description = "Malformed multipart body", body = ApiResponseDto),
        (status = 500, description = "Internal server error", body = ApiResponseDto)
    ),
)]
pub async fn add_student(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let form = read_student_form(multipart).await?;

    let student_service = StudentService::new(&state.db, &state.photos);
    student_service.create_student(form).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::success("Student created successfully")),
    ))
}

/// Delete a student, its pickup persons and its photo
#[utoipa::path(
    delete,
    path = "/api/student/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = ApiResponseDto),
        (status = 404, description = "Student not found", body = ApiResponseDto),
        (status = 500, description = "Internal server error", body = ApiResponseDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db, &state.photos);
    student_service.delete_student(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::success("Student deleted successfully")),
    ))
}

/// Get a student with its pickup persons
#[utoipa::path(
    get,
    path = "/api/view-student/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = StudentDetailDto),
        (status = 404, description = "Student not found", body = ApiResponseDto),
        (status = 500, description = "Internal server error", body = ApiResponseDto)
    ),
)]
pub async fn view_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db, &state.photos);
    let student = student_service.get_student(id).await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Get a student to prefill the edit form
#[utoipa::path(
    get,
    path = "/api/edit-student/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = StudentDetailDto),
        (status = 404, description = "Student not found", body = ApiResponseDto),
        (status = 500, description = "Internal server error", body = ApiResponseDto)
    ),
)]
pub async fn edit_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db, &state.photos);
    let student = student_service.get_student(id).await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Update a student and reconcile its pickup persons
#[utoipa::path(
    post,
    path = "/api/edit-student/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    request_body(content = StudentMultipartForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Student updated, or validation failed with `success: false`", body = ApiResponseDto),
        (status = 400, description = "Malformed multipart body", body = ApiResponseDto),
        (status = 404, description = "Student not found", body = ApiResponseDto),
        (status = 500, description = "Internal server error", body = ApiResponseDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let form = read_student_form(multipart).await?;

    let student_service = StudentService::new(&state.db, &state.photos);
    student_service.update_student(id, form).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::success("Student updated successfully")),
    ))
}

/// Collects the multipart fields of a student submission.
///
/// Unknown fields are skipped. A `photo` part that is empty, or the text `null` sent
/// without a filename, counts as no photo.
async fn read_student_form(mut multipart: Multipart) -> Result<StudentForm, Error> {
    let mut form = StudentForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "photo" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;

                let is_null = file_name.is_none() && bytes.as_ref() == b"null";
                form.photo = (!bytes.is_empty() && !is_null).then(|| PhotoUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            "childName" => form.child_name = Some(field.text().await?),
            "dateOfBirth" => form.date_of_birth = Some(field.text().await?),
            "class" => form.class = Some(field.text().await?),
            "address" => form.address = Some(field.text().await?),
            "city" => form.city = Some(field.text().await?),
            "state" => form.state = Some(field.text().await?),
            "country" => form.country = Some(field.text().await?),
            "zipCode" => form.zip_code = Some(field.text().await?),
            "pickupPersons" => form.pickup_persons = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}
