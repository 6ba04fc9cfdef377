use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The only MIME type the drop zone accepts.
pub const PDF_MIME_TYPE: &str = "application/pdf";

pub type UploadId = u64;
pub type RefreshId = u64;

/// A backend job as reported by the upload and listing endpoints.
///
/// Unknown fields (copies, timestamps, error text) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub filename: String,
    pub status: String,
}

/// A file picked by the user or dropped onto the zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    /// Client-reported MIME type. Not verified against the content.
    pub mime_type: String,
    pub path: PathBuf,
}

impl FileCandidate {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            path: path.into(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME_TYPE
    }
}
