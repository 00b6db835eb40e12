use axum::{
    Json,
    extract::{Multipart, State},
};

use super::types::CleanReport;
use super::upload::read_upload_batch;
use crate::api::error::AppError;

#[utoipa::path(
    post,
    path = "/clean",
    responses(
        (status = 200, description = "Per-file outcomes for the batch", body = CleanReport),
        (status = 400, description = "Malformed upload or unsupported extension"),
        (status = 413, description = "A file exceeds the size limit")
    ),
    tag = "clean"
)]
pub async fn clean_batch(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Json<CleanReport>, AppError> {
    let files = read_upload_batch(&mut multipart, &state.config).await?;
    let batch = state.batch.clean_batch(files).await?;
    Ok(Json(CleanReport::from_batch(&batch)))
}
