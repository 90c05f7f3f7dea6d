use std::time::Duration;

use buzz_model::{AnalysisResult, HealthStatus};
use futures_util::StreamExt;
use thiserror::Error;

/// Where the analysis backend listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_RESPONSE_BYTES: u64 = 4 * 1024 * 1024;

/// Connection settings for the backend, fixed at client construction.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid base url {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },
    #[error("server error: {text}")]
    Status { code: u16, text: String },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unreadable response: {0}")]
    Parse(String),
    #[error("response too large (max {max_bytes} bytes)")]
    TooLarge { max_bytes: u64 },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // Timeouts also report as request errors; classify them first.
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// The two backend endpoints the app consumes.
#[async_trait::async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn analyze(&self, query: &str) -> Result<AnalysisResult, ApiError>;
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// Reqwest-backed [`AnalysisApi`] talking JSON to the backend.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    /// Validates the base URL and builds the underlying HTTP client.
    /// The base URL keeps no trailing slash so paths join cleanly.
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|err| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
            message: err.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            settings: ApiSettings { base_url, ..settings },
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    /// Reads the body while enforcing the response size cap. The
    /// Content-Length header is only a hint; the running total decides.
    async fn read_capped(&self, response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(length) = response.content_length() {
            if length > max_bytes {
                return Err(ApiError::TooLarge { max_bytes });
            }
        }
        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if bytes.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(ApiError::TooLarge { max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    async fn read_checked(&self, response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                text: status.to_string(),
            });
        }
        self.read_capped(response).await
    }
}

#[async_trait::async_trait]
impl AnalysisApi for HttpAnalysisClient {
    async fn analyze(&self, query: &str) -> Result<AnalysisResult, ApiError> {
        let url = format!("{}/analyze", self.settings.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;
        let bytes = self.read_checked(response).await?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Parse(err.to_string()))
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = format!("{}/health", self.settings.base_url);
        let response = self.client.get(&url).send().await?;
        let bytes = self.read_checked(response).await?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Parse(err.to_string()))
    }
}
