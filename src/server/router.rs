//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every JSON endpoint lives under `/api` and is registered with its OpenAPI specification,
//! Swagger UI is served at `/api/docs`. Stored photos are served outside the API under
//! `/storage/student-images/`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::student::STUDENT_IMAGES_URL,
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/students` - Paginated student listing
/// - `POST /api/add-student` - Create a student (multipart)
/// - `DELETE /api/student/{id}` - Delete a student
/// - `GET /api/view-student/{id}` - Student with pickup persons
/// - `GET /api/edit-student/{id}` - Same payload, used to prefill the edit form
/// - `POST /api/edit-student/{id}` - Update a student (multipart)
/// - `GET /storage/student-images/{filename}` - Stored photos
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, photos };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Satchel", description = "Satchel student records API"), tags(
        (name = controller::student::STUDENT_TAG, description = "Student and pickup person records"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::student::list_students))
        .routes(routes!(controller::student::add_student))
        .routes(routes!(controller::student::delete_student))
        .routes(routes!(controller::student::view_student))
        .routes(routes!(
            controller::student::edit_student,
            controller::student::update_student
        ))
        .split_for_parts();

    routes
        .route(
            &format!("{}/{{filename}}", STUDENT_IMAGES_URL),
            get(controller::media::student_image),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
