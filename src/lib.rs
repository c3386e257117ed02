// Library root
// -----------
// This crate exposes a small library surface for the uploader. The binary
// (`main.rs`) parses arguments and wires these modules together.
//
// Module responsibilities:
// - `payload`: Reads the local file and builds the JSON upload body.
// - `api`: Encapsulates the single HTTP interaction with the file server.
// - `error`: Typed failures for every fallible step of an upload.
//
// Keeping the HTTP and payload logic out of `main` lets the tests drive
// each step on its own and match on the exact failure kind.
pub mod api;
pub mod error;
pub mod payload;

pub use api::{ApiClient, DEFAULT_BASE_URL};
pub use error::UploadError;
pub use payload::UploadRequest;
