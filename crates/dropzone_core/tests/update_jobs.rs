use std::sync::{Arc, Once};

use dropzone_core::{update, Dictionary, Effect, Job, JobListContent, Msg, Translator, WidgetState};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dropzone_logging::initialize_for_tests);
}

fn polish() -> WidgetState {
    let dictionary: Dictionary = [("loading", "Ładowanie..."), ("jobs_empty", "Brak zadań.")]
        .into_iter()
        .collect();
    WidgetState::new(Translator::new(Arc::new(dictionary)), 5)
}

fn job(id: i64, filename: &str, status: &str) -> Job {
    Job {
        id,
        filename: filename.to_string(),
        status: status.to_string(),
    }
}

#[test]
fn page_load_shows_loading_before_any_response() {
    init_logging();
    let (mut state, effects) = update(polish(), Msg::PageLoaded);

    assert_eq!(
        effects,
        vec![Effect::FetchJobs {
            refresh_id: 1,
            limit: 5,
        }]
    );
    assert_eq!(
        state.view().job_list,
        JobListContent::Loading("Ładowanie...".to_string())
    );
    assert_eq!(state.view().refreshes_in_flight, 1);
    assert!(state.consume_dirty());
}

#[test]
fn loading_uses_builtin_text_when_dictionary_lacks_it() {
    init_logging();
    let (state, _) = update(WidgetState::default(), Msg::RefreshRequested);
    assert_eq!(
        state.view().job_list,
        JobListContent::Loading("Loading...".to_string())
    );

    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            refresh_id: 1,
            outcome: Ok(Vec::new()),
        },
    );
    assert_eq!(state.view().job_list, JobListContent::Empty("No jobs.".to_string()));
}

#[test]
fn empty_response_renders_no_jobs_text() {
    init_logging();
    let (state, _) = update(polish(), Msg::PageLoaded);
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            refresh_id: 1,
            outcome: Ok(Vec::new()),
        },
    );

    assert_eq!(
        state.view().job_list,
        JobListContent::Empty("Brak zadań.".to_string())
    );
    assert_eq!(state.view().refreshes_in_flight, 0);
}

#[test]
fn entries_keep_backend_order_and_raw_text() {
    init_logging();
    let (state, _) = update(polish(), Msg::PageLoaded);
    let jobs = vec![
        job(9, "<b>bold</b>.pdf", "printed"),
        job(3, "z.pdf", "failed"),
        job(12, "a.pdf", "pending"),
    ];
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            refresh_id: 1,
            outcome: Ok(jobs),
        },
    );

    assert_eq!(
        state.view().job_list,
        JobListContent::Entries(vec![
            "#9 <b>bold</b>.pdf – printed".to_string(),
            "#3 z.pdf – failed".to_string(),
            "#12 a.pdf – pending".to_string(),
        ])
    );
}

#[test]
fn failure_replaces_list_with_message() {
    init_logging();
    let (state, _) = update(polish(), Msg::PageLoaded);
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            refresh_id: 1,
            outcome: Ok(vec![job(1, "a.pdf", "printed")]),
        },
    );
    let (state, _) = update(state, Msg::RefreshRequested);
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            refresh_id: 2,
            outcome: Err("Could not fetch jobs".to_string()),
        },
    );

    assert_eq!(
        state.view().job_list,
        JobListContent::Failed("Could not fetch jobs".to_string())
    );
}

#[test]
fn overlapping_refreshes_keep_last_completed_response() {
    init_logging();
    let (state, first) = update(polish(), Msg::PageLoaded);
    let (state, second) = update(state, Msg::RefreshRequested);
    assert_eq!(
        [first, second].concat(),
        vec![
            Effect::FetchJobs {
                refresh_id: 1,
                limit: 5,
            },
            Effect::FetchJobs {
                refresh_id: 2,
                limit: 5,
            },
        ]
    );
    assert_eq!(state.view().refreshes_in_flight, 2);

    // The newer request answers first; the older one lands afterwards and stays.
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            refresh_id: 2,
            outcome: Ok(vec![job(2, "new.pdf", "pending")]),
        },
    );
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            refresh_id: 1,
            outcome: Ok(vec![job(1, "old.pdf", "printed")]),
        },
    );

    assert_eq!(
        state.view().job_list,
        JobListContent::Entries(vec!["#1 old.pdf – printed".to_string()])
    );
    assert_eq!(state.view().refreshes_in_flight, 0);
}

#[test]
fn job_decodes_from_backend_payload_with_extra_fields() {
    let payload = r#"{"id":7,"filename":"a.pdf","copies":1,"status":"pending","created_at":"2024-01-01T00:00:00","printed_at":null,"error":null}"#;
    let decoded: Job = serde_json::from_str(payload).unwrap();
    assert_eq!(decoded, job(7, "a.pdf", "pending"));
}
