//! Widget configuration: RON file first, command line on top.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dropzone_core::DEFAULT_JOB_LIMIT;
use dropzone_engine::{ApiSettings, DEFAULT_BASE_URL};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

/// Submit PDF files to a print backend and follow its recent jobs.
#[derive(Parser, Debug, Default)]
#[command(name = "dropzone", version)]
pub struct Args {
    /// Files to drop onto the zone at start-up.
    pub files: Vec<PathBuf>,
    /// RON configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Backend base URL, e.g. http://127.0.0.1:8000
    #[arg(long)]
    pub server: Option<String>,
    /// Bundled dictionary to use (en, pl).
    #[arg(long)]
    pub lang: Option<String>,
    /// Dictionary file (.ron or .json) replacing the bundled one.
    #[arg(long)]
    pub dictionary: Option<PathBuf>,
    /// Re-fetch the job list every N seconds.
    #[arg(long)]
    pub poll_secs: Option<u64>,
    /// Read drop/click/refresh commands from stdin.
    #[arg(long, short)]
    pub interactive: bool,
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub base_url: String,
    pub job_limit: usize,
    /// Unset means requests may hang indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub poll_interval_secs: Option<u64>,
    pub lang: String,
    pub dictionary_path: Option<PathBuf>,
    pub log: LogDestination,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            job_limit: DEFAULT_JOB_LIMIT,
            request_timeout_secs: None,
            poll_interval_secs: None,
            lang: "en".to_string(),
            dictionary_path: None,
            log: LogDestination::File,
            log_file: PathBuf::from("./dropzone.log"),
            verbose: false,
        }
    }
}

impl WidgetConfig {
    /// Reads `path` when given; otherwise starts from defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(server) = &args.server {
            self.base_url = server.clone();
        }
        if let Some(lang) = &args.lang {
            self.lang = lang.clone();
        }
        if let Some(path) = &args.dictionary {
            self.dictionary_path = Some(path.clone());
        }
        if let Some(secs) = args.poll_secs {
            self.poll_interval_secs = Some(secs);
        }
        if let Some(log) = args.log {
            self.log = log;
        }
        self.verbose |= args.verbose;
        self
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..ApiSettings::default()
        }
    }

    pub fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
