use std::env;

/// Runtime configuration for the cleaning service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum size of a single uploaded file in bytes (default: 1 GiB)
    pub max_file_size: usize,

    /// Path to the ExifTool executable (default: "exiftool", resolved via PATH)
    pub exiftool_path: String,

    /// Cleaner implementation: "exiftool" or "copy" (default: "exiftool")
    pub cleaner_type: String,

    /// Content-Type applied to downloads whose extension is not recognized
    pub download_mime_fallback: String,

    /// TCP port to listen on (default: 3000)
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024 * 1024, // 1 GiB
            exiftool_path: "exiftool".to_string(),
            cleaner_type: "exiftool".to_string(),
            download_mime_fallback: "video/mp4".to_string(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),

            exiftool_path: env::var("EXIFTOOL_PATH").unwrap_or(default.exiftool_path),

            cleaner_type: env::var("CLEANER_TYPE").unwrap_or(default.cleaner_type),

            download_mime_fallback: env::var("DOWNLOAD_MIME_FALLBACK")
                .unwrap_or(default.download_mime_fallback),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),
        }
    }

    /// Create config for development and tests (no external tool required)
    pub fn development() -> Self {
        Self {
            max_file_size: 64 * 1024 * 1024,
            exiftool_path: "exiftool".to_string(),
            cleaner_type: "copy".to_string(),
            download_mime_fallback: "video/mp4".to_string(),
            port: 3000,
        }
    }
}
