use axum::{
    body::Body,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};

use super::upload::read_upload_batch;
use crate::api::error::AppError;
use crate::models::FileOutcome;
use crate::utils::validation::mime_for_extension;

#[utoipa::path(
    post,
    path = "/clean/file",
    responses(
        (status = 200, description = "Cleaned video as an attachment download"),
        (status = 400, description = "Zero or more than one file provided"),
        (status = 422, description = "The external tool failed on the file")
    ),
    tag = "clean"
)]
pub async fn clean_single(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let files = read_upload_batch(&mut multipart, &state.config).await?;
    if files.is_empty() {
        return Err(AppError::BadRequest("No file provided".to_string()));
    }
    if files.len() > 1 {
        return Err(AppError::BadRequest(
            "Expected exactly one file; use /clean/archive for batches".to_string(),
        ));
    }

    let original_name = files[0].name.clone();
    let batch = state.batch.clean_batch(files).await?;

    match batch.outcomes.into_iter().next() {
        Some(FileOutcome::Cleaned(cleaned)) => {
            let content_type =
                mime_for_extension(&original_name, &state.config.download_mime_fallback);
            let headers = [
                (header::CONTENT_TYPE, content_type),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", cleaned.name),
                ),
            ];
            Ok((headers, Body::from(cleaned.bytes)).into_response())
        }
        Some(FileOutcome::Failed { name, error }) => Err(AppError::Unprocessable(format!(
            "Failed to clean {}: {}",
            name, error
        ))),
        None => Err(AppError::Internal("batch produced no outcome".to_string())),
    }
}
