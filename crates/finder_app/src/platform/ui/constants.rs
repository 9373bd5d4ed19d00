pub const TITLE: &str = "Travel Window Finder";
pub const QUERY_PLACEHOLDER: &str = "Example: I want to travel to Chikmagalur, Coorg and Sakleshpur for 5 days. What are the best conditions?";
pub const SUBMIT_IDLE_LABEL: &str = "Find Best Window";
pub const SUBMIT_BUSY_LABEL: &str = "Finding...";
pub const RESULT_HEADING: &str = "Recommended Travel Window";
pub const REASONS_HEADING: &str = "Reasons:";
