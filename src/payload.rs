// Upload payload: turns a file on disk into the JSON body the file server
// expects on `POST /files`.

use crate::error::UploadError;
use base64::{engine::general_purpose, Engine};
use serde::Serialize;
use std::path::Path;

/// Value of the `type` field for every upload made by this tool.
pub const FILE_TYPE_IMAGE: &str = "image";

/// Body of the upload request. Field names mirror what the server reads
/// from `req.body`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub is_public: bool,
    pub data: String,
    pub parent_id: String,
}

impl UploadRequest {
    /// Build a request from raw bytes. `data` is the base64 text of `bytes`.
    pub fn new(name: impl Into<String>, bytes: &[u8], parent_id: impl Into<String>) -> Self {
        UploadRequest {
            name: name.into(),
            file_type: FILE_TYPE_IMAGE.to_string(),
            is_public: true,
            data: encode_data(bytes),
            parent_id: parent_id.into(),
        }
    }

    /// Read the whole file at `path` and build the request for it. There is
    /// no size limit: the file is loaded into memory before encoding.
    pub fn from_file(path: &Path, parent_id: &str) -> Result<Self, UploadError> {
        let bytes = std::fs::read(path).map_err(|source| UploadError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(UploadRequest::new(display_name(path), &bytes, parent_id))
    }
}

/// Check that `path` exists and is not a directory before anything else
/// runs. Pipes and device nodes pass through to the read.
pub fn validate_file(path: &Path) -> Result<(), UploadError> {
    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(UploadError::MissingFile(path.to_path_buf()))
        }
        Err(source) => {
            return Err(UploadError::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if meta.is_dir() {
        return Err(UploadError::IsDirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Final segment of `path`, e.g. `/a/b/c/photo.png` gives `photo.png`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Standard alphabet, padded, no line wrapping.
pub fn encode_data(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}
