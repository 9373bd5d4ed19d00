//! Finder client: recommendation requests and effect execution.
mod client;
mod recommend;
mod types;

pub use client::ClientHandle;
pub use recommend::{ClientSettings, Recommender, ReqwestRecommender, DEFAULT_ENDPOINT};
pub use types::{
    ClientEvent, ErrorBody, FailureKind, Recommendation, RecommendError, RecommendRequest,
    RequestId, TravelWindow, GENERIC_FAILURE_MESSAGE,
};
