use std::sync::{mpsc, Arc};
use std::thread;

use buzz_model::{AnalysisResult, HealthStatus};

use crate::client::{AnalysisApi, ApiError, ApiSettings, HttpAnalysisClient};

pub type RequestId = u64;

enum EngineCommand {
    Analyze { request_id: RequestId, query: String },
    CheckHealth,
}

/// Outcome of one engine command, delivered over the event channel.
#[derive(Debug)]
pub enum EngineEvent {
    AnalysisFinished {
        request_id: RequestId,
        result: Result<AnalysisResult, ApiError>,
    },
    HealthChecked {
        result: Result<HealthStatus, ApiError>,
    },
}

#[derive(Debug)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Builds the HTTP client and starts the engine thread with its own
    /// tokio runtime. Commands run concurrently; events arrive in
    /// completion order, not submission order.
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let api = Arc::new(HttpAnalysisClient::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn analyze(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze {
            request_id,
            query: query.into(),
        });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn AnalysisApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Analyze { request_id, query } => {
            let result = api.analyze(&query).await;
            let _ = event_tx.send(EngineEvent::AnalysisFinished { request_id, result });
        }
        EngineCommand::CheckHealth => {
            let result = api.health().await;
            let _ = event_tx.send(EngineEvent::HealthChecked { result });
        }
    }
}
