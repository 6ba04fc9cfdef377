use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use dropzone_core::{FileCandidate, RefreshId, UploadId};
use dropzone_logging::{dz_debug, dz_warn};

use crate::{EngineEvent, JobsApi};

/// Receives engine completions. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Upload {
        upload_id: UploadId,
        file: FileCandidate,
    },
    FetchJobs {
        refresh_id: RefreshId,
        limit: usize,
    },
}

/// Runs backend requests off the UI thread.
///
/// Every command becomes its own task: nothing waits for a sibling, nothing
/// is cancelled, and completions are emitted in the order they settle.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn JobsApi>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("dropzone-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(api.as_ref(), command, sink.as_ref()).await;
                    });
                }
                dz_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn upload(&self, upload_id: UploadId, file: FileCandidate) {
        let _ = self.cmd_tx.send(EngineCommand::Upload { upload_id, file });
    }

    pub fn fetch_jobs(&self, refresh_id: RefreshId, limit: usize) {
        let _ = self.cmd_tx.send(EngineCommand::FetchJobs { refresh_id, limit });
    }
}

async fn handle_command(api: &dyn JobsApi, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Upload { upload_id, file } => {
            let result = api.upload(&file).await;
            if let Err(err) = &result {
                dz_warn!("Upload {} ({}) failed: {}", upload_id, file.name, err);
            }
            sink.emit(EngineEvent::UploadCompleted { upload_id, result });
        }
        EngineCommand::FetchJobs { refresh_id, limit } => {
            let result = api.list_jobs(limit).await;
            if let Err(err) = &result {
                dz_warn!("Job list refresh {} failed: {}", refresh_id, err);
            }
            sink.emit(EngineEvent::JobsFetched { refresh_id, result });
        }
    }
}
