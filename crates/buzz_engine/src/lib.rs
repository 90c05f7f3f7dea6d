//! Buzz engine: HTTP client for the analysis backend and the thread that runs it.
mod client;
mod engine;

pub use client::{AnalysisApi, ApiError, ApiSettings, HttpAnalysisClient, DEFAULT_BASE_URL};
pub use engine::{EngineEvent, EngineHandle, RequestId};
