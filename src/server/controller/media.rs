use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::server::{
    error::{storage::StorageError, Error},
    model::app::AppState,
    storage::content_type_for,
};

/// Serves a stored student photo from the media root.
///
/// Unknown and rejected filenames both answer 404.
pub async fn student_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, Error> {
    let bytes = match state.photos.read(&filename).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) | Err(StorageError::InvalidFilename(_)) => {
            return Ok(StatusCode::NOT_FOUND.into_response())
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type_for(&filename))],
        bytes,
    )
        .into_response())
}
