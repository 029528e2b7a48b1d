use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobboard_core::RequestId;
use jobboard_logging::{jobboard_debug, jobboard_warn};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    FetchPage {
        request_id: RequestId,
        page: i64,
        location: String,
    },
}

/// Runs fetches on a background runtime and reports their outcomes as events.
///
/// Requests run concurrently and are never cancelled; ordering of the
/// resulting events follows completion, not issue order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("jobboard-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                jobboard_debug!("engine command channel closed; shutting down runtime");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, request_id: RequestId, page: i64, location: impl Into<String>) {
        let command = EngineCommand::FetchPage {
            request_id,
            page,
            location: location.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            jobboard_warn!("engine thread is gone; request {} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage {
            request_id,
            page,
            location,
        } => {
            let result = fetcher.fetch_page(page, &location).await;
            let _ = event_tx.send(EngineEvent::PageFetched { request_id, result });
        }
    }
}
