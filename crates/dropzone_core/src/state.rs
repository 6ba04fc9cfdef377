use crate::view_model::{UploadRowView, WidgetViewModel};
use crate::{DropZoneState, JobListView, Translator, UploadController};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    translator: Translator,
    upload: UploadController,
    jobs: JobListView,
    dirty: bool,
}

impl WidgetState {
    pub fn new(translator: Translator, job_limit: usize) -> Self {
        Self {
            translator,
            upload: UploadController::new(),
            jobs: JobListView::new(job_limit),
            dirty: false,
        }
    }

    pub fn view(&self) -> WidgetViewModel {
        WidgetViewModel {
            drop_zone_active: self.upload.drop_zone() == DropZoneState::Dragging,
            status_text: self.upload.status_text().to_string(),
            job_list: self.jobs.content().clone(),
            uploads: self
                .upload
                .uploads()
                .map(|(upload_id, slot)| UploadRowView {
                    upload_id,
                    filename: slot.filename.clone(),
                    phase: slot.phase.clone(),
                })
                .collect(),
            uploads_in_flight: self.upload.in_flight(),
            refreshes_in_flight: self.jobs.pending(),
            dirty: self.dirty,
        }
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn upload(&self) -> &UploadController {
        &self.upload
    }

    pub fn jobs(&self) -> &JobListView {
        &self.jobs
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn parts_mut(&mut self) -> (&Translator, &mut UploadController, &mut JobListView) {
        (&self.translator, &mut self.upload, &mut self.jobs)
    }
}
