use buzz_core::{Effect, Msg};
use buzz_engine::{ApiError, ApiSettings, EngineEvent, EngineHandle};
use buzz_logging::{buzz_info, buzz_warn};
use buzz_model::HealthStatus;

/// Something the shell has to react to: a message for the core state
/// machine, or a health report the shell displays itself.
pub enum ShellEvent {
    Core(Msg),
    Health(Result<HealthStatus, ApiError>),
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchAnalysis { request_id, query } => {
                    buzz_info!("FetchAnalysis request_id={} query={}", request_id, query);
                    self.engine.analyze(request_id, query);
                }
            }
        }
    }

    pub fn request_health(&self) {
        buzz_info!("CheckHealth");
        self.engine.check_health();
    }

    /// Non-blocking poll; the shell calls this from its wait loops.
    pub fn poll(&self) -> Option<ShellEvent> {
        let event = self.engine.try_recv()?;
        Some(match event {
            EngineEvent::AnalysisFinished { request_id, result } => match result {
                Ok(result) => ShellEvent::Core(Msg::SearchCompleted { request_id, result }),
                Err(err) => {
                    buzz_warn!("analysis request {} failed: {}", request_id, err);
                    ShellEvent::Core(Msg::SearchFailed {
                        request_id,
                        message: err.to_string(),
                    })
                }
            },
            EngineEvent::HealthChecked { result } => ShellEvent::Health(result),
        })
    }
}
