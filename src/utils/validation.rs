use anyhow::{Result, anyhow};
use std::path::Path;

/// Extension allow-list for uploads, mirroring the upload form's `accept`
/// filter. Anything else is rejected at intake.
pub const ALLOWED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates file size against maximum limit
pub fn validate_file_size(size: usize, max_size: usize) -> Result<()> {
    if size > max_size {
        return Err(anyhow!(ValidationError {
            code: "FILE_TOO_LARGE",
            message: format!(
                "File size {} bytes exceeds maximum allowed {} bytes ({} MB)",
                size,
                max_size,
                max_size / 1024 / 1024
            ),
        }));
    }
    Ok(())
}

/// Sanitizes filename to prevent path traversal and injection attacks
/// Returns the sanitized filename or an error if the name is invalid
pub fn sanitize_filename(filename: &str) -> Result<String> {
    // Get only the filename component (remove any path)
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    if name.is_empty() {
        return Err(anyhow!(ValidationError {
            code: "INVALID_FILENAME",
            message: "Filename cannot be empty".to_string(),
        }));
    }

    // Check for path traversal attempts
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        tracing::warn!("Path traversal attempt detected: {}", filename);
    }

    // Remove dangerous characters, keep only safe ones
    // We allow most Unicode characters but block path separators and reserved characters
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_control()
                || c == '/'
                || c == '\\'
                || c == ':'
                || c == '*'
                || c == '?'
                || c == '"'
                || c == '<'
                || c == '>'
                || c == '|'
                || c == ';'
            {
                '_'
            } else {
                c
            }
        })
        .collect();

    // Limit length safely for UTF-8
    let sanitized = if sanitized.len() > 255 {
        let mut end = 255;
        while !sanitized.is_char_boundary(end) {
            end -= 1;
        }
        sanitized[..end].to_string()
    } else {
        sanitized
    };

    // Prevent hidden files
    if sanitized.starts_with('.') {
        return Err(anyhow!(ValidationError {
            code: "HIDDEN_FILE",
            message: "Hidden files (starting with '.') are not allowed".to_string(),
        }));
    }

    Ok(sanitized)
}

/// Validates the file extension against the video allow-list
pub fn validate_extension(filename: &str) -> Result<()> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if ALLOWED_VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        return Ok(());
    }

    Err(anyhow!(ValidationError {
        code: "UNSUPPORTED_EXTENSION",
        message: format!(
            "File extension '.{}' is not a supported video format (mp4, mov, avi, mkv)",
            ext
        ),
    }))
}

/// Resolves the download Content-Type from the file extension, falling back
/// to the configured default for unrecognized containers.
pub fn mime_for_extension(filename: &str, fallback: &str) -> String {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("mp4") => "video/mp4".to_string(),
        Some("mov") => "video/quicktime".to_string(),
        Some("avi") => "video/x-msvideo".to_string(),
        Some("mkv") => "video/x-matroska".to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_size() {
        assert!(validate_file_size(1024, 2048).is_ok());
        assert!(validate_file_size(2048, 2048).is_ok());
        assert!(validate_file_size(2049, 2048).is_err());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("clip.mp4").unwrap(), "clip.mp4");
        assert_eq!(sanitize_filename("my video.mov").unwrap(), "my video.mov");
        assert_eq!(
            sanitize_filename("clip<take2>.mp4").unwrap(),
            "clip_take2_.mp4"
        );
        assert_eq!(sanitize_filename("日本語.mp4").unwrap(), "日本語.mp4");

        // Path traversal
        assert_eq!(sanitize_filename("../../../etc/clip.mp4").unwrap(), "clip.mp4");
        // Backslashes are not separators on unix; the replaced name starts
        // with '.' and is rejected as hidden
        assert!(sanitize_filename("..\\..\\videos\\clip.mkv").is_err());

        // Hidden files
        assert!(sanitize_filename(".hidden.mp4").is_err());
        assert!(sanitize_filename("").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("clip.mp4").is_ok());
        assert!(validate_extension("clip.MOV").is_ok());
        assert!(validate_extension("clip.avi").is_ok());
        assert!(validate_extension("clip.mkv").is_ok());

        assert!(validate_extension("clip.webm").is_err());
        assert!(validate_extension("clip.exe").is_err());
        assert!(validate_extension("clip").is_err());
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("a.mp4", "video/mp4"), "video/mp4");
        assert_eq!(mime_for_extension("a.mov", "video/mp4"), "video/quicktime");
        assert_eq!(mime_for_extension("a.AVI", "video/mp4"), "video/x-msvideo");
        assert_eq!(mime_for_extension("a.mkv", "video/mp4"), "video/x-matroska");
        assert_eq!(mime_for_extension("a.webm", "video/mp4"), "video/mp4");
    }
}
