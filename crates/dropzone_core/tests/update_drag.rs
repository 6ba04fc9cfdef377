use std::sync::Once;

use dropzone_core::{update, Effect, FileCandidate, Msg, WidgetState, REJECTION_TEXT};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dropzone_logging::initialize_for_tests);
}

#[test]
fn drag_enter_and_over_activate_until_leave() {
    init_logging();
    let (mut state, effects) = update(WidgetState::default(), Msg::DragEnter);
    assert!(effects.is_empty());
    assert!(state.view().drop_zone_active);
    assert!(state.consume_dirty());

    // Repeated dragover does not re-render.
    let (mut state, _) = update(state, Msg::DragOver);
    assert!(state.view().drop_zone_active);
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::DragLeave);
    assert!(!state.view().drop_zone_active);
    assert!(state.consume_dirty());
}

#[test]
fn drop_clears_affordance_and_handles_files() {
    init_logging();
    let (state, _) = update(WidgetState::default(), Msg::DragEnter);
    let (state, _) = update(state, Msg::DragOver);
    let (state, effects) = update(
        state,
        Msg::Dropped(vec![FileCandidate::new("notes.txt", "text/plain", "/tmp/notes.txt")]),
    );

    let view = state.view();
    assert!(!view.drop_zone_active);
    assert_eq!(view.status_text, REJECTION_TEXT);
    assert!(effects.is_empty());
}

#[test]
fn click_opens_picker_without_touching_status() {
    init_logging();
    let (mut state, effects) = update(WidgetState::default(), Msg::DropZoneClicked);

    assert_eq!(effects, vec![Effect::OpenFilePicker]);
    assert_eq!(state.view().status_text, "");
    assert!(!state.consume_dirty());
}

#[test]
fn only_drag_and_drop_suppress_default_handling() {
    assert!(Msg::DragEnter.suppresses_default());
    assert!(Msg::DragOver.suppresses_default());
    assert!(Msg::Dropped(Vec::new()).suppresses_default());
    assert!(!Msg::DragLeave.suppresses_default());
    assert!(!Msg::FilesChosen(Vec::new()).suppresses_default());
}
