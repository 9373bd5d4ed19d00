use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ClientSettings;

pub type RequestId = u64;

/// Fallback shown when the backend reported an error without a `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to get recommendation.";

/// Body posted to the recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendRequest {
    pub message: String,
}

/// Successful response payload, accepted verbatim.
///
/// Every field defaults when absent: a missing field surfaces as an empty
/// value in the rendered output rather than as an error.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub duration_days: u32,
    #[serde(default)]
    pub best_window: TravelWindow,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TravelWindow {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Completed {
        request: RequestId,
        result: Result<Recommendation, RecommendError>,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RecommendError {
    pub kind: FailureKind,
    pub message: String,
}

impl RecommendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Text surfaced to the user for this failure.
    ///
    /// A server-reported `detail` wins; any outcome where the backend never
    /// produced a usable response maps to the fixed connect hint.
    pub fn user_message(&self, settings: &ClientSettings) -> String {
        match &self.kind {
            FailureKind::HttpStatus {
                detail: Some(detail),
                ..
            } => detail.clone(),
            FailureKind::HttpStatus { detail: None, .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            FailureKind::Network | FailureKind::Timeout | FailureKind::InvalidBody => {
                settings.connect_hint()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Response arrived with a non-success status.
    HttpStatus { status: u16, detail: Option<String> },
    /// Success status but the body was not the recommendation shape.
    InvalidBody,
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus { status, .. } => write!(f, "http status {status}"),
            FailureKind::InvalidBody => write!(f, "invalid body"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
