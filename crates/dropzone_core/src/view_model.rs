use crate::{JobListContent, UploadId, UploadPhase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetViewModel {
    pub drop_zone_active: bool,
    pub status_text: String,
    pub job_list: JobListContent,
    pub uploads: Vec<UploadRowView>,
    pub uploads_in_flight: usize,
    pub refreshes_in_flight: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRowView {
    pub upload_id: UploadId,
    pub filename: String,
    pub phase: UploadPhase,
}
