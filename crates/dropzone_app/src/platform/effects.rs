use std::sync::{mpsc, Arc};

use anyhow::Context;
use dropzone_core::{Effect, Msg};
use dropzone_engine::{EngineEvent, EngineHandle, EventSink, ReqwestJobsApi};
use dropzone_logging::{dz_info, dz_warn};

use super::app::HostEvent;
use super::config::WidgetConfig;
use super::page::Page;

/// Forwards engine completions to the host loop as widget messages.
struct HostSink {
    tx: mpsc::Sender<HostEvent>,
}

impl EventSink for HostSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(HostEvent::Widget(to_msg(event)));
    }
}

/// Failures reach the widget as the text the user should see.
fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UploadCompleted { upload_id, result } => Msg::UploadFinished {
            upload_id,
            outcome: result.map_err(|err| err.to_string()),
        },
        EngineEvent::JobsFetched { refresh_id, result } => Msg::JobsLoaded {
            refresh_id,
            outcome: result.map_err(|err| err.to_string()),
        },
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: &WidgetConfig, tx: mpsc::Sender<HostEvent>) -> anyhow::Result<Self> {
        let api = ReqwestJobsApi::new(config.api_settings())
            .context("configuring backend client")?;
        let engine = EngineHandle::new(Arc::new(api), Arc::new(HostSink { tx }))
            .context("starting request runtime")?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>, page: &mut Page) {
        for effect in effects {
            match effect {
                Effect::OpenFilePicker => {
                    if !page.open_file_picker() {
                        dz_warn!("Drop zone clicked but the page has no file input");
                    }
                }
                Effect::Upload { upload_id, file } => {
                    dz_info!(
                        "Upload upload_id={} name={} path={}",
                        upload_id,
                        file.name,
                        file.path.display()
                    );
                    self.engine.upload(upload_id, file);
                }
                Effect::FetchJobs { refresh_id, limit } => {
                    dz_info!("FetchJobs refresh_id={} limit={}", refresh_id, limit);
                    self.engine.fetch_jobs(refresh_id, limit);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropzone_engine::ApiError;

    #[test]
    fn failed_requests_carry_display_text() {
        let msg = to_msg(EngineEvent::UploadCompleted {
            upload_id: 3,
            result: Err(ApiError::UploadStatus(500)),
        });
        assert_eq!(
            msg,
            Msg::UploadFinished {
                upload_id: 3,
                outcome: Err("Upload failed".to_string()),
            }
        );

        let msg = to_msg(EngineEvent::JobsFetched {
            refresh_id: 1,
            result: Err(ApiError::Network("connection refused".to_string())),
        });
        assert_eq!(
            msg,
            Msg::JobsLoaded {
                refresh_id: 1,
                outcome: Err("connection refused".to_string()),
            }
        );
    }
}
