use crate::Recommendation;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub busy: bool,
    pub outcome: Option<OutcomeView>,
    pub dirty: bool,
}

/// Result block shown below the form, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeView {
    Recommendation(RecommendationView),
    Error(String),
}

/// Render-ready recommendation with display formatting applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationView {
    /// Destinations joined by `", "`.
    pub destinations: String,
    pub duration_days: u32,
    pub start_date: String,
    pub end_date: String,
    pub score: f64,
    /// Reason strings in the order received.
    pub reasons: Vec<String>,
}

impl RecommendationView {
    pub fn from_recommendation(recommendation: &Recommendation) -> Self {
        Self {
            destinations: recommendation.destinations.join(", "),
            duration_days: recommendation.duration_days,
            start_date: recommendation.best_window.start_date.clone(),
            end_date: recommendation.best_window.end_date.clone(),
            score: recommendation.best_window.score,
            reasons: recommendation.best_window.reasons.clone(),
        }
    }
}
