use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The input control is "required": an empty query never submits.
            // A submit while a request is loading is ignored outright rather
            // than relying on the disabled control to never fire.
            if state.query().is_empty() || state.loading_request().is_some() {
                return (state, Vec::new());
            }
            let message = state.query().to_owned();
            let request = state.begin_request();
            vec![Effect::SubmitQuery { request, message }]
        }
        Msg::RecommendationArrived {
            request,
            recommendation,
        } => {
            state.complete_success(request, recommendation);
            Vec::new()
        }
        Msg::RecommendationFailed { request, message } => {
            state.complete_failure(request, message);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
