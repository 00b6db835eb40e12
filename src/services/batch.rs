use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::models::{BatchResult, CleanedFile, FileOutcome, UploadedFile, cleaned_name};
use crate::services::cleaner::{CleanerError, MetadataCleaner};

/// Runs one upload batch: each file is persisted into a request-scoped
/// scratch directory, handed to the cleaner, and the output read back into
/// memory. A failed file never aborts the batch.
pub struct BatchService {
    cleaner: Arc<dyn MetadataCleaner>,
}

impl BatchService {
    pub fn new(cleaner: Arc<dyn MetadataCleaner>) -> Self {
        Self { cleaner }
    }

    /// Process all files sequentially. The scratch directory lives exactly
    /// as long as the batch and is removed when it drops, success or not.
    pub async fn clean_batch(&self, files: Vec<UploadedFile>) -> Result<BatchResult> {
        if files.is_empty() {
            return Ok(BatchResult::default());
        }

        let scratch = tempfile::tempdir().context("failed to create scratch directory")?;
        let mut outcomes = Vec::with_capacity(files.len());

        for file in &files {
            match self.clean_one(scratch.path(), file).await {
                Ok(cleaned) => {
                    tracing::info!("🧹 Cleaned {} ({} bytes)", file.name, cleaned.bytes.len());
                    outcomes.push(FileOutcome::Cleaned(cleaned));
                }
                Err(e) => {
                    tracing::warn!("Failed to clean {}: {}", file.name, e);
                    outcomes.push(FileOutcome::Failed {
                        name: file.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(BatchResult { outcomes })
    }

    async fn clean_one(
        &self,
        scratch: &Path,
        file: &UploadedFile,
    ) -> Result<CleanedFile, CleanerError> {
        let input_path = scratch.join(&file.name);
        let output_name = cleaned_name(&file.name);
        let output_path = scratch.join(&output_name);

        tokio::fs::write(&input_path, &file.bytes).await?;
        self.cleaner.strip_metadata(&input_path, &output_path).await?;
        let bytes = tokio::fs::read(&output_path).await?;

        Ok(CleanedFile {
            name: output_name,
            bytes,
        })
    }
}
