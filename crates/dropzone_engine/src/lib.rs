//! Drop zone engine: backend requests and effect execution.
mod api;
mod engine;
mod types;

pub use api::{ApiSettings, JobsApi, ReqwestJobsApi, DEFAULT_BASE_URL};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use types::{ApiError, EngineEvent};
