use crate::{Effect, Msg, WidgetState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WidgetState, msg: Msg) -> (WidgetState, Vec<Effect>) {
    let (changed, effects) = {
        let (translator, upload, jobs) = state.parts_mut();
        match msg {
            Msg::PageLoaded | Msg::RefreshRequested => (true, vec![jobs.refresh(translator)]),
            Msg::DragEnter | Msg::DragOver => (upload.drag_over(), Vec::new()),
            Msg::DragLeave => (upload.drag_end(), Vec::new()),
            Msg::Dropped(files) => {
                upload.drag_end();
                (true, upload.accept_files(files, translator))
            }
            Msg::DropZoneClicked => (false, vec![Effect::OpenFilePicker]),
            Msg::FilesChosen(files) => (true, upload.accept_files(files, translator)),
            Msg::UploadFinished { upload_id, outcome } => {
                // Only a successful upload changes what the backend lists.
                if upload.finish(upload_id, outcome, translator) {
                    (true, vec![jobs.refresh(translator)])
                } else {
                    (true, Vec::new())
                }
            }
            Msg::JobsLoaded {
                refresh_id,
                outcome,
            } => {
                jobs.apply(refresh_id, outcome, translator);
                (true, Vec::new())
            }
        }
    };

    if changed {
        state.mark_dirty();
    }
    (state, effects)
}
