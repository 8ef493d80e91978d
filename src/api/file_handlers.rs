//! File Upload Handlers
//!
//! Plain file uploads into the `files` table, outside of registration.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};

use super::handlers::{read_file_field, AppState, FILES_PART};
use crate::utils::error::{AppError, AppResult};

/// Multipart part name for a single upload
pub const FILE_PART: &str = "file";

/// Keeps the body-limit rejection distinct from other malformed uploads
fn upload_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

/// Upload a single file
///
/// Answers with a plain-text message; a store failure is reported as 500.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, String)> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(FILE_PART) {
            continue;
        }

        let file = read_file_field(field).await.map_err(upload_error)?;
        let file_name = file.display_name().to_string();

        return Ok(match state.file_service.store_file(file).await {
            Ok(_) => (
                StatusCode::OK,
                format!("File inserted successfully: {}", file_name),
            ),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to upload file: {}", e),
            ),
        });
    }

    log::warn!("No '{}' part found in upload", FILE_PART);
    Err(AppError::BadRequest(format!(
        "Multipart part '{}' is required",
        FILE_PART
    )))
}

/// Upload several files, reporting one message per file
pub async fn upload_multiple_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<Vec<String>>> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(FILES_PART) {
            continue;
        }
        files.push(read_file_field(field).await.map_err(upload_error)?);
    }

    let outcomes = state.file_service.store_files(files).await;
    Ok(Json(outcomes.into_iter().map(|o| o.message).collect()))
}
