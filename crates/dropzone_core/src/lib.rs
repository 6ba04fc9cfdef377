//! Drop zone core: pure state machine and view-model helpers.
mod effect;
mod jobs;
mod msg;
mod state;
mod translate;
mod types;
mod update;
mod upload;
mod view_model;

pub use effect::Effect;
pub use jobs::{format_job_entry, JobListContent, JobListView, DEFAULT_JOB_LIMIT};
pub use msg::Msg;
pub use state::WidgetState;
pub use translate::{Dictionary, Translator};
pub use types::{FileCandidate, Job, RefreshId, UploadId, PDF_MIME_TYPE};
pub use update::update;
pub use upload::{DropZoneState, UploadController, UploadPhase, UploadSlot, REJECTION_TEXT};
pub use view_model::{UploadRowView, WidgetViewModel};
