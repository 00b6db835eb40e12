use bytes::Bytes;

/// Prefix applied to every cleaned output file name.
pub const CLEANED_PREFIX: &str = "cleaned_";

/// A file received from the upload boundary, buffered in memory for the
/// duration of one batch.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Bytes,
}

/// Output of a successful cleaner invocation. The name is always the
/// original name behind [`CLEANED_PREFIX`].
#[derive(Debug, Clone)]
pub struct CleanedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Per-file outcome inside a batch. Failures carry the original file name
/// and the tool diagnostics.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Cleaned(CleanedFile),
    Failed { name: String, error: String },
}

/// Ordered per-file outcomes for one upload batch.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchResult {
    pub fn cleaned(&self) -> impl Iterator<Item = &CleanedFile> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Cleaned(file) => Some(file),
            FileOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Cleaned(_) => None,
            FileOutcome::Failed { name, error } => Some((name.as_str(), error.as_str())),
        })
    }

    pub fn succeeded_count(&self) -> usize {
        self.cleaned().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }
}

/// Derive the output name for a cleaned file from its original name.
pub fn cleaned_name(original: &str) -> String {
    format!("{CLEANED_PREFIX}{original}")
}
