use axum::{
    body::Body,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};

use super::upload::read_upload_batch;
use crate::api::error::AppError;
use crate::services::archive::build_zip;

/// Name of the bundled download
const ARCHIVE_NAME: &str = "cleaned_videos.zip";

#[utoipa::path(
    post,
    path = "/clean/archive",
    responses(
        (status = 200, description = "ZIP archive of all successfully cleaned videos"),
        (status = 400, description = "No files provided"),
        (status = 422, description = "Every file failed to clean")
    ),
    tag = "clean"
)]
pub async fn clean_archive(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let files = read_upload_batch(&mut multipart, &state.config).await?;
    if files.is_empty() {
        return Err(AppError::BadRequest("No files provided".to_string()));
    }

    let batch = state.batch.clean_batch(files).await?;
    let cleaned: Vec<_> = batch.cleaned().cloned().collect();

    if cleaned.is_empty() {
        let errors: Vec<String> = batch
            .failures()
            .map(|(name, error)| format!("{}: {}", name, error))
            .collect();
        return Err(AppError::Unprocessable(format!(
            "No files could be cleaned: {}",
            errors.join("; ")
        )));
    }

    let zip_bytes = build_zip(&cleaned)?;

    let headers = [
        (header::CONTENT_TYPE.as_str(), "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION.as_str(),
            format!("attachment; filename=\"{}\"", ARCHIVE_NAME),
        ),
        ("x-cleaned-count", batch.succeeded_count().to_string()),
        ("x-failed-count", batch.failed_count().to_string()),
    ];

    Ok((headers, Body::from(zip_bytes)).into_response())
}
