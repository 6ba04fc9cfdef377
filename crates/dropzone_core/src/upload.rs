//! Drop zone interaction, file validation and per-file upload tracking.

use std::collections::BTreeMap;

use crate::{Effect, FileCandidate, Job, Translator, UploadId};

/// Status text shown when a selection contains no PDF at all.
pub const REJECTION_TEXT: &str = "PDF only.";

/// Finished uploads kept around for display once their batch is done.
const FINISHED_UPLOADS_KEPT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZoneState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPhase {
    Uploading,
    Done { job_id: i64 },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSlot {
    pub filename: String,
    pub phase: UploadPhase,
}

/// Owns the drop zone and the shared status line.
///
/// Every submission writes to the same status line, so when several uploads
/// overlap the one that completes last decides what the user sees. Each
/// upload is still tracked on its own slot keyed by [`UploadId`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadController {
    drop_zone: DropZoneState,
    status_text: String,
    uploads: BTreeMap<UploadId, UploadSlot>,
    last_upload_id: UploadId,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drop_zone(&self) -> DropZoneState {
        self.drop_zone
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn uploads(&self) -> impl Iterator<Item = (UploadId, &UploadSlot)> {
        self.uploads.iter().map(|(id, slot)| (*id, slot))
    }

    pub fn in_flight(&self) -> usize {
        self.uploads
            .values()
            .filter(|slot| slot.phase == UploadPhase::Uploading)
            .count()
    }

    /// Returns true when the affordance changed.
    pub(crate) fn drag_over(&mut self) -> bool {
        let changed = self.drop_zone != DropZoneState::Dragging;
        self.drop_zone = DropZoneState::Dragging;
        changed
    }

    /// Returns true when the affordance changed.
    pub(crate) fn drag_end(&mut self) -> bool {
        let changed = self.drop_zone != DropZoneState::Idle;
        self.drop_zone = DropZoneState::Idle;
        changed
    }

    /// Validates a selection and starts one upload per PDF in it.
    ///
    /// An empty or PDF-free selection only sets the rejection text.
    pub(crate) fn accept_files(
        &mut self,
        files: Vec<FileCandidate>,
        translator: &Translator,
    ) -> Vec<Effect> {
        let pdfs: Vec<FileCandidate> = files.into_iter().filter(FileCandidate::is_pdf).collect();
        if pdfs.is_empty() {
            self.status_text = REJECTION_TEXT.to_string();
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(pdfs.len());
        for file in pdfs {
            self.last_upload_id += 1;
            let upload_id = self.last_upload_id;
            self.status_text = translator.translate("uploading", &[("filename", &file.name)]);
            self.uploads.insert(
                upload_id,
                UploadSlot {
                    filename: file.name.clone(),
                    phase: UploadPhase::Uploading,
                },
            );
            effects.push(Effect::Upload { upload_id, file });
        }
        effects
    }

    /// Applies the outcome of one upload. Returns true when it succeeded.
    pub(crate) fn finish(
        &mut self,
        upload_id: UploadId,
        outcome: Result<Job, String>,
        translator: &Translator,
    ) -> bool {
        let (phase, succeeded) = match outcome {
            Ok(job) => {
                self.status_text = translator.translate(
                    "status",
                    &[
                        ("id", &job.id),
                        ("filename", &job.filename),
                        ("status", &job.status),
                    ],
                );
                (UploadPhase::Done { job_id: job.id }, true)
            }
            Err(message) => {
                self.status_text = message.clone();
                (UploadPhase::Failed { message }, false)
            }
        };

        if let Some(slot) = self.uploads.get_mut(&upload_id) {
            slot.phase = phase;
        }
        self.prune_finished();
        succeeded
    }

    fn prune_finished(&mut self) {
        let finished: Vec<UploadId> = self
            .uploads
            .iter()
            .filter(|(_, slot)| slot.phase != UploadPhase::Uploading)
            .map(|(id, _)| *id)
            .collect();
        let excess = finished.len().saturating_sub(FINISHED_UPLOADS_KEPT);
        for id in finished.into_iter().take(excess) {
            self.uploads.remove(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> FileCandidate {
        FileCandidate::new(name, "application/pdf", format!("/tmp/{name}"))
    }

    #[test]
    fn mixed_selection_keeps_only_pdfs() {
        let mut controller = UploadController::new();
        let files = vec![
            pdf("a.pdf"),
            FileCandidate::new("b.png", "image/png", "/tmp/b.png"),
            FileCandidate::new("c.pdf", "application/x-pdf", "/tmp/c.pdf"),
        ];

        let effects = controller.accept_files(files, &Translator::default());

        assert_eq!(
            effects,
            vec![Effect::Upload {
                upload_id: 1,
                file: pdf("a.pdf"),
            }]
        );
        assert_eq!(controller.in_flight(), 1);
    }

    #[test]
    fn old_finished_uploads_are_pruned() {
        let mut controller = UploadController::new();
        let translator = Translator::default();
        for n in 0..(FINISHED_UPLOADS_KEPT + 5) {
            let effects = controller.accept_files(vec![pdf(&format!("{n}.pdf"))], &translator);
            let Some(Effect::Upload { upload_id, .. }) = effects.into_iter().next() else {
                panic!("expected upload effect");
            };
            controller.finish(upload_id, Err("boom".to_string()), &translator);
        }

        assert_eq!(controller.uploads().count(), FINISHED_UPLOADS_KEPT);
        assert_eq!(controller.uploads().next().map(|(id, _)| id), Some(6));
    }
}
