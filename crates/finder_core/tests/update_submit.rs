use std::sync::Once;

use finder_core::{update, AppState, Effect, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

fn submit_query(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

#[test]
fn submit_emits_single_effect_with_verbatim_message() {
    init_logging();
    let state = AppState::new();
    let query = "I want to travel to Coorg and Sakleshpur for 5 days. What are the best conditions?";

    let (state, effects) = submit_query(state, query);
    let view = state.view();

    assert!(view.busy);
    assert!(view.outcome.is_none());
    assert!(view.dirty);
    assert_eq!(
        effects,
        vec![Effect::SubmitQuery {
            request: 1,
            message: query.to_string(),
        }]
    );
}

#[test]
fn empty_query_does_not_submit() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert!(!state.view().busy);
    assert!(state.view().outcome.is_none());
    assert!(!state.consume_dirty());
}

#[test]
fn whitespace_query_still_submits_verbatim() {
    // The required-field guard blocks the empty string only; whitespace
    // passes through untrimmed, matching browser-level enforcement.
    init_logging();
    let state = AppState::new();

    let (state, effects) = submit_query(state, "   ");

    assert!(state.view().busy);
    assert_eq!(
        effects,
        vec![Effect::SubmitQuery {
            request: 1,
            message: "   ".to_string(),
        }]
    );
}

#[test]
fn submit_is_ignored_while_loading() {
    init_logging();
    let state = AppState::new();
    let (mut state, _effects) = submit_query(state, "five days in Coorg");
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert!(state.view().busy);
    assert!(!state.consume_dirty());
}

#[test]
fn request_ids_increase_per_submission() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = submit_query(state, "five days in Coorg");
    assert_eq!(
        effects,
        vec![Effect::SubmitQuery {
            request: 1,
            message: "five days in Coorg".to_string(),
        }]
    );

    let (state, _) = update(
        state,
        Msg::RecommendationFailed {
            request: 1,
            message: "No valid window found".to_string(),
        },
    );

    let (_state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::SubmitQuery {
            request: 2,
            message: "five days in Coorg".to_string(),
        }]
    );
}

#[test]
fn query_edits_mark_the_view_dirty_without_effects() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::QueryChanged("Coorg".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.view().query, "Coorg");
    assert!(state.consume_dirty());

    // Re-sending the same text is not a visible change.
    let (mut state, effects) = update(state, Msg::QueryChanged("Coorg".to_string()));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
