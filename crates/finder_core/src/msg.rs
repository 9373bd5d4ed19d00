#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the query input box.
    QueryChanged(String),
    /// User activated the submit control.
    SubmitClicked,
    /// Client completed a request with a recommendation.
    RecommendationArrived {
        request: crate::RequestId,
        recommendation: crate::Recommendation,
    },
    /// Client completed a request with a user-facing failure message.
    RecommendationFailed {
        request: crate::RequestId,
        message: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
