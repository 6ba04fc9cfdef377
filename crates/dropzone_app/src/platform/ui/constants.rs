use crate::platform::page::ElementId;

pub const HEADING_TITLE: ElementId = "title";
pub const DROPZONE: ElementId = "dropzone";
pub const FILE_INPUT: ElementId = "file-input";
pub const UPLOAD_STATUS: ElementId = "upload-status";
pub const HEADING_JOBS: ElementId = "recent-jobs";
pub const JOBS_LIST: ElementId = "jobs-list";

pub const ACTIVE_CLASS: &str = "active";
