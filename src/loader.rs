use crate::activity::Activity;
use crate::errors::LoadError;
use crate::models::ForecastResponse;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Something that can produce the forecast payload for an activity.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Loads the forecast; only a transport-successful, `ok: true` body is `Ok`.
    async fn load(&self, activity: Activity) -> Result<ForecastResponse, LoadError>;
}

/// Forecast backend reached over HTTP. No retry and no timeout.
#[derive(Debug, Clone)]
pub struct HttpForecastSource {
    client: Client,
    endpoint: String,
}

impl HttpForecastSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ForecastSource for HttpForecastSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn load(&self, activity: Activity) -> Result<ForecastResponse, LoadError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("activity", activity.label())])
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), len = bytes.len(), "forecast response received");

        let parsed = serde_json::from_slice::<ForecastResponse>(&bytes);
        if !status.is_success() {
            let message = parsed.ok().and_then(|body| body.error);
            warn!(status = status.as_u16(), "forecast backend returned an error status");
            return Err(LoadError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = parsed.map_err(|e| LoadError::Decode(e.to_string()))?;
        check_ok(body)
    }
}

/// Rejects bodies the backend flagged with `ok: false`.
pub fn check_ok(body: ForecastResponse) -> Result<ForecastResponse, LoadError> {
    if body.ok {
        Ok(body)
    } else {
        Err(LoadError::Backend(body.error))
    }
}
