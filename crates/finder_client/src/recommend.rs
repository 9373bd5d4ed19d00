use std::time::Duration;

use url::Url;

use crate::{
    ErrorBody, FailureKind, Recommendation, RecommendError, RecommendRequest, RequestId,
};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/travel/recommend";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: Url,
    /// No connect timeout by default: the call may hang on an unresponsive
    /// server, matching the behavior users see in the browser client.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint parses"),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl ClientSettings {
    /// Fixed message shown when the backend never produced a usable response.
    pub fn connect_hint(&self) -> String {
        format!(
            "Failed to connect to backend. Make sure the backend server is running at {}",
            self.endpoint.origin().ascii_serialization()
        )
    }
}

#[async_trait::async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(
        &self,
        request: RequestId,
        message: &str,
    ) -> Result<Recommendation, RecommendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestRecommender {
    settings: ClientSettings,
}

impl ReqwestRecommender {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, RecommendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| RecommendError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Recommender for ReqwestRecommender {
    async fn recommend(
        &self,
        _request: RequestId,
        message: &str,
    ) -> Result<Recommendation, RecommendError> {
        let client = self.build_client()?;

        let response = client
            .post(self.settings.endpoint.clone())
            .json(&RecommendRequest {
                message: message.to_owned(),
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            // The error body is best-effort JSON; a missing or unparseable
            // `detail` leaves the generic fallback to the caller.
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.detail);
            return Err(RecommendError::new(
                FailureKind::HttpStatus {
                    status: status.as_u16(),
                    detail,
                },
                status.to_string(),
            ));
        }

        serde_json::from_str(&body)
            .map_err(|err| RecommendError::new(FailureKind::InvalidBody, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RecommendError {
    if err.is_timeout() {
        return RecommendError::new(FailureKind::Timeout, err.to_string());
    }
    RecommendError::new(FailureKind::Network, err.to_string())
}
