use crate::view_model::{AppViewModel, OutcomeView, RecommendationView};

/// Identifier for one submission attempt, allocated on submit.
///
/// Completions are tagged with the id of the attempt that produced them;
/// a completion whose id is not the one currently loading is stale and ignored.
pub type RequestId = u64;

/// A recommended travel window as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelWindow {
    pub start_date: String,
    pub end_date: String,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// A full recommendation for a submitted query.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub destinations: Vec<String>,
    pub duration_days: u32,
    pub best_window: TravelWindow,
}

/// Exactly one variant is active at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading {
        request: RequestId,
    },
    Success(Recommendation),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    query: String,
    view_state: ViewState,
    last_request: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the render-ready projection of the current state.
    pub fn view(&self) -> AppViewModel {
        let outcome = match &self.view_state {
            ViewState::Idle | ViewState::Loading { .. } => None,
            ViewState::Success(recommendation) => Some(OutcomeView::Recommendation(
                RecommendationView::from_recommendation(recommendation),
            )),
            ViewState::Failure(message) => Some(OutcomeView::Error(message.clone())),
        };
        AppViewModel {
            query: self.query.clone(),
            busy: matches!(self.view_state, ViewState::Loading { .. }),
            outcome,
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn set_query(&mut self, text: String) {
        if self.query != text {
            self.query = text;
            self.dirty = true;
        }
    }

    pub(crate) fn loading_request(&self) -> Option<RequestId> {
        match self.view_state {
            ViewState::Loading { request } => Some(request),
            _ => None,
        }
    }

    /// Allocates the next request id and enters Loading.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.last_request += 1;
        self.view_state = ViewState::Loading {
            request: self.last_request,
        };
        self.dirty = true;
        self.last_request
    }

    pub(crate) fn complete_success(&mut self, request: RequestId, recommendation: Recommendation) {
        if self.loading_request() == Some(request) {
            self.view_state = ViewState::Success(recommendation);
            self.dirty = true;
        }
    }

    pub(crate) fn complete_failure(&mut self, request: RequestId, message: String) {
        if self.loading_request() == Some(request) {
            self.view_state = ViewState::Failure(message);
            self.dirty = true;
        }
    }
}
