// Error types for the upload flow. Each fallible step maps to its own
// variant so a caller can tell a missing file from a dead server.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("Is a directory: {}", .0.display())]
    IsDirectory(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Token is not a valid header value")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Response ({status}) is not valid JSON: {source}")]
    ParseResponse {
        status: reqwest::StatusCode,
        #[source]
        source: serde_json::Error,
    },
}
