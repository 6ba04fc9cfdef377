use crate::{FileCandidate, Job, RefreshId, UploadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page finished loading; the job list is fetched once.
    PageLoaded,
    /// Pointer dragging files entered the drop zone.
    DragEnter,
    /// Pointer dragging files is moving over the drop zone.
    DragOver,
    /// Pointer left the drop zone without dropping.
    DragLeave,
    /// Files were dropped onto the zone.
    Dropped(Vec<FileCandidate>),
    /// User clicked the drop zone.
    DropZoneClicked,
    /// The file picker reported a selection (`change`).
    FilesChosen(Vec<FileCandidate>),
    /// An upload request settled. `Err` holds the text to show.
    UploadFinished {
        upload_id: UploadId,
        outcome: Result<Job, String>,
    },
    /// Something outside the widget asked for a fresh job list.
    RefreshRequested,
    /// A job list request settled. `Err` holds the text to show.
    JobsLoaded {
        refresh_id: RefreshId,
        outcome: Result<Vec<Job>, String>,
    },
}

impl Msg {
    /// Whether the host must suppress the platform's default handling of
    /// the event that produced this message (opening a dropped file, etc.).
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Msg::DragEnter | Msg::DragOver | Msg::Dropped(_))
    }
}
