use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::process::Command;

use crate::config::AppConfig;

/// Failure of a single cleaner invocation. Always local to one file; the
/// batch keeps going.
#[derive(Debug, Error)]
pub enum CleanerError {
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Narrow interface over the external metadata-removal tool so the process
/// spawn, argument list, and exit-code interpretation stay in one place and
/// can be swapped for a fake in tests.
#[async_trait]
pub trait MetadataCleaner: Send + Sync {
    /// Strip all metadata from `input`, writing the cleaned copy to `output`.
    async fn strip_metadata(&self, input: &Path, output: &Path) -> Result<(), CleanerError>;

    /// Check whether the tool is available
    async fn health_check(&self) -> bool;

    fn tool_name(&self) -> &str;
}

/// ExifTool invoked as a child process: `exiftool -all= -o <output> <input>`
pub struct ExifToolCleaner {
    program: PathBuf,
    name: String,
}

impl ExifToolCleaner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let name = program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("exiftool")
            .to_string();
        Self { program, name }
    }
}

#[async_trait]
impl MetadataCleaner for ExifToolCleaner {
    async fn strip_metadata(&self, input: &Path, output: &Path) -> Result<(), CleanerError> {
        let result = Command::new(&self.program)
            .arg("-all=")
            .arg("-o")
            .arg(output)
            .arg(input)
            .output()
            .await
            .map_err(|e| CleanerError::Spawn {
                tool: self.name.clone(),
                source: e,
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            return Err(CleanerError::ToolFailed {
                tool: self.name.clone(),
                status: result.status,
                stderr,
            });
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        Command::new(&self.program)
            .arg("-ver")
            .output()
            .await
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    fn tool_name(&self) -> &str {
        &self.name
    }
}

/// Pass-through cleaner for development/testing: copies input to output
/// without touching any metadata
pub struct CopyCleaner;

#[async_trait]
impl MetadataCleaner for CopyCleaner {
    async fn strip_metadata(&self, input: &Path, output: &Path) -> Result<(), CleanerError> {
        tracing::warn!("CopyCleaner: passing file through unmodified (development mode)");
        tokio::fs::copy(input, output).await?;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn tool_name(&self) -> &str {
        "copy"
    }
}

/// Factory function to create the appropriate cleaner based on config
pub fn create_cleaner(config: &AppConfig) -> Box<dyn MetadataCleaner> {
    match config.cleaner_type.to_lowercase().as_str() {
        "exiftool" => Box::new(ExifToolCleaner::new(config.exiftool_path.as_str())),
        "copy" | "noop" | "disabled" => Box::new(CopyCleaner),
        other => {
            tracing::warn!("Unknown cleaner type '{}', using ExifToolCleaner", other);
            Box::new(ExifToolCleaner::new(config.exiftool_path.as_str()))
        }
    }
}
