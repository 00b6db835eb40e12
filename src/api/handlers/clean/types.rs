use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{BatchResult, CLEANED_PREFIX, FileOutcome};

/// Per-file entry in a batch report
#[derive(Serialize, ToSchema)]
pub struct FileReport {
    /// Original (sanitized) upload name
    pub filename: String,
    /// "cleaned" or "failed"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome summary for one upload batch
#[derive(Serialize, ToSchema)]
pub struct CleanReport {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<FileReport>,
}

impl CleanReport {
    pub fn from_batch(batch: &BatchResult) -> Self {
        let results = batch
            .outcomes
            .iter()
            .map(|outcome| match outcome {
                FileOutcome::Cleaned(file) => FileReport {
                    // cleaned name is always prefix + original name
                    filename: file
                        .name
                        .strip_prefix(CLEANED_PREFIX)
                        .unwrap_or(&file.name)
                        .to_string(),
                    status: "cleaned".to_string(),
                    cleaned_name: Some(file.name.clone()),
                    size: Some(file.bytes.len()),
                    error: None,
                },
                FileOutcome::Failed { name, error } => FileReport {
                    filename: name.clone(),
                    status: "failed".to_string(),
                    cleaned_name: None,
                    size: None,
                    error: Some(error.clone()),
                },
            })
            .collect();

        CleanReport {
            processed: batch.outcomes.len(),
            succeeded: batch.succeeded_count(),
            failed: batch.failed_count(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CleanedFile;

    #[test]
    fn test_report_from_mixed_batch() {
        let batch = BatchResult {
            outcomes: vec![
                FileOutcome::Cleaned(CleanedFile {
                    name: "cleaned_clip1.mp4".to_string(),
                    bytes: vec![0; 16],
                }),
                FileOutcome::Failed {
                    name: "clip2.mov".to_string(),
                    error: "exiftool exited with exit status: 1".to_string(),
                },
            ],
        };

        let report = CleanReport::from_batch(&batch);
        assert_eq!(report.processed, 2);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 1);

        assert_eq!(report.results[0].filename, "clip1.mp4");
        assert_eq!(report.results[0].status, "cleaned");
        assert_eq!(
            report.results[0].cleaned_name.as_deref(),
            Some("cleaned_clip1.mp4")
        );
        assert_eq!(report.results[0].size, Some(16));

        assert_eq!(report.results[1].filename, "clip2.mov");
        assert_eq!(report.results[1].status, "failed");
        assert!(report.results[1].error.as_deref().unwrap().contains("exiftool"));
    }
}
