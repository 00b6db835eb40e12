use axum::extract::Multipart;

use crate::api::error::AppError;
use crate::config::AppConfig;
use crate::models::UploadedFile;
use crate::utils::validation::{sanitize_filename, validate_extension, validate_file_size};

/// Drain the multipart stream into memory. Fields without a filename are
/// ignored; disallowed extensions and oversized files are rejected before
/// any processing starts.
pub(super) async fn read_upload_batch(
    multipart: &mut Multipart,
    config: &AppConfig,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(original_name) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let name =
            sanitize_filename(&original_name).map_err(|e| AppError::BadRequest(e.to_string()))?;
        validate_extension(&name).map_err(|e| AppError::BadRequest(e.to_string()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        validate_file_size(bytes.len(), config.max_file_size)
            .map_err(|e| AppError::PayloadTooLarge(e.to_string()))?;

        files.push(UploadedFile { name, bytes });
    }

    Ok(files)
}
