use crate::{FileCandidate, RefreshId, UploadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the platform file picker bound to the file input.
    OpenFilePicker,
    /// POST the file as multipart field `file`.
    Upload {
        upload_id: UploadId,
        file: FileCandidate,
    },
    /// GET the most recent jobs.
    FetchJobs {
        refresh_id: RefreshId,
        limit: usize,
    },
}
