use finder_core::{AppViewModel, OutcomeView, RecommendationView};

use super::constants::*;

/// Formats the current view as screen lines.
///
/// The form is always present; the outcome block below it is the error text
/// alone on failure, the full recommendation on success, and nothing while
/// idle or loading.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if view.query.is_empty() {
        lines.push(format!("Query: ({QUERY_PLACEHOLDER})"));
    } else {
        lines.push(format!("Query: {}", view.query));
    }

    if view.busy {
        lines.push(format!("[{SUBMIT_BUSY_LABEL}] (disabled)"));
    } else {
        lines.push(format!("[{SUBMIT_IDLE_LABEL}]"));
    }

    match &view.outcome {
        Some(OutcomeView::Error(message)) => lines.push(message.clone()),
        Some(OutcomeView::Recommendation(rec)) => render_recommendation(&mut lines, rec),
        None => {}
    }

    lines
}

fn render_recommendation(lines: &mut Vec<String>, rec: &RecommendationView) {
    lines.push(RESULT_HEADING.to_string());
    lines.push(format!("Destinations: {}", rec.destinations));
    lines.push(format!("Duration: {} days", rec.duration_days));
    lines.push(format!("Best Window: {} to {}", rec.start_date, rec.end_date));
    lines.push(format!("Score: {}/10", rec.score));
    lines.push(REASONS_HEADING.to_string());
    for reason in &rec.reasons {
        lines.push(format!("  - {reason}"));
    }
}
