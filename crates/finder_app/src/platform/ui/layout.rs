//! Static chrome printed once at startup.

use super::constants::{QUERY_PLACEHOLDER, TITLE};

pub fn intro_lines() -> Vec<String> {
    vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        QUERY_PLACEHOLDER.to_string(),
        "Type a query and press Enter. Ctrl-D exits.".to_string(),
    ]
}
