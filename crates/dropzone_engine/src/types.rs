use std::io;
use std::path::PathBuf;

use dropzone_core::{Job, RefreshId, UploadId};
use thiserror::Error;

#[derive(Debug)]
pub enum EngineEvent {
    UploadCompleted {
        upload_id: UploadId,
        result: Result<Job, ApiError>,
    },
    JobsFetched {
        refresh_id: RefreshId,
        result: Result<Vec<Job>, ApiError>,
    },
}

/// Failures talking to the backend.
///
/// The `Display` text is what ends up in front of the user, so the HTTP
/// status variants render as one generic sentence each.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Upload failed")]
    UploadStatus(u16),
    #[error("Could not fetch jobs")]
    ListStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code of a rejected request, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UploadStatus(code) | ApiError::ListStatus(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout;
        }
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
