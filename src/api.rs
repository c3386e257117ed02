// API client module: a small blocking HTTP client that talks to the file
// server. One upload is one request, so the client stays synchronous.

use crate::error::UploadError;
use crate::payload::UploadRequest;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Duration;

/// Where the file server listens unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:5000";

/// Header carrying the caller's session token (`X-Token`).
pub const TOKEN_HEADER: &str = "x-token";

/// Blocking client bound to one server and one token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` that sends `token` in `X-Token` on
    /// every request. No request timeout is set: a silent server blocks the
    /// call until the connection drops.
    pub fn new(base_url: impl Into<String>, token: &str) -> Result<Self, UploadError> {
        let client = Client::builder()
            .default_headers(token_headers(token)?)
            .timeout(None::<Duration>)
            .build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Full URL of the upload endpoint.
    pub fn files_url(&self) -> String {
        format!("{}/files", self.base_url.trim_end_matches('/'))
    }

    /// POST the request as JSON to `/files` and return the parsed response
    /// body. Error statuses still return their JSON body, the server reports
    /// failures like `{"error": "Unauthorized"}` that way.
    pub fn upload(&self, req: &UploadRequest) -> Result<Value, UploadError> {
        let url = self.files_url();
        log::debug!("POST {} ({} base64 chars)", url, req.data.len());
        let res = self.client.post(&url).json(req).send()?;

        let status = res.status();
        if !status.is_success() {
            log::warn!("server answered {}", status);
        }
        let body = res.text()?;
        serde_json::from_str(&body).map_err(|source| UploadError::ParseResponse { status, source })
    }
}

fn token_headers(token: &str) -> Result<HeaderMap, UploadError> {
    let mut headers = HeaderMap::new();
    let mut value = HeaderValue::from_str(token)?;
    value.set_sensitive(true);
    headers.insert(HeaderName::from_static(TOKEN_HEADER), value);
    Ok(headers)
}
