//! Recent jobs list.

use std::collections::BTreeSet;

use crate::{Effect, Job, RefreshId, Translator};

pub const DEFAULT_JOB_LIMIT: usize = 5;

const LOADING_FALLBACK: &str = "Loading...";
const EMPTY_FALLBACK: &str = "No jobs.";

/// What the job list area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JobListContent {
    #[default]
    Blank,
    Loading(String),
    Empty(String),
    Failed(String),
    Entries(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListView {
    limit: usize,
    content: JobListContent,
    last_refresh_id: RefreshId,
    pending: BTreeSet<RefreshId>,
}

impl Default for JobListView {
    fn default() -> Self {
        Self::new(DEFAULT_JOB_LIMIT)
    }
}

impl JobListView {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            content: JobListContent::Blank,
            last_refresh_id: 0,
            pending: BTreeSet::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn content(&self) -> &JobListContent {
        &self.content
    }

    /// Number of refreshes still waiting for a response.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Shows the loading text and asks for the latest jobs.
    ///
    /// Overlapping refreshes are not deduplicated: whichever response is
    /// applied last stays on screen.
    pub(crate) fn refresh(&mut self, translator: &Translator) -> Effect {
        self.last_refresh_id += 1;
        self.pending.insert(self.last_refresh_id);
        self.content = JobListContent::Loading(translator.lookup_or("loading", LOADING_FALLBACK));
        Effect::FetchJobs {
            refresh_id: self.last_refresh_id,
            limit: self.limit,
        }
    }

    pub(crate) fn apply(
        &mut self,
        refresh_id: RefreshId,
        outcome: Result<Vec<Job>, String>,
        translator: &Translator,
    ) {
        self.pending.remove(&refresh_id);
        self.content = match outcome {
            Err(message) => JobListContent::Failed(message),
            Ok(jobs) if jobs.is_empty() => {
                JobListContent::Empty(translator.lookup_or("jobs_empty", EMPTY_FALLBACK))
            }
            Ok(jobs) => JobListContent::Entries(jobs.iter().map(format_job_entry).collect()),
        };
    }
}

/// Renders a job as `#<id> <filename> – <status>`.
pub fn format_job_entry(job: &Job) -> String {
    format!("#{} {} – {}", job.id, job.filename, job.status)
}
