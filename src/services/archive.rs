use anyhow::{Context, Result};
use std::io::Write;
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

use crate::models::CleanedFile;

/// Bundle cleaned files into a single in-memory ZIP archive with a flat
/// namespace. Entry names are the cleaned names; callers only build an
/// archive when at least one file succeeded.
pub fn build_zip(files: &[CleanedFile]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(std::io::Cursor::new(&mut buffer));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for file in files {
            zip.start_file(file.name.as_str(), options)
                .with_context(|| format!("failed to add {} to archive", file.name))?;
            zip.write_all(&file.bytes)
                .with_context(|| format!("failed to write {} into archive", file.name))?;
        }

        zip.finish().context("failed to finalize archive")?;
    }

    Ok(buffer)
}
