//! Pure extraction pipelines, one per entity kind.
//!
//! Every pipeline maps an already classified [`Page`] (or a pair of pages) to
//! typed records without touching the network or the clock. Repeating rows
//! are found with a single row selector per listing; the same selector drives
//! pagination termination in [`crate::listing`].

pub mod events;
pub mod feed;
pub mod map_stats;
pub mod matches;
pub mod matches_stats;
pub mod ranking;
pub mod results;
pub mod search;
pub mod team;

#[cfg(test)]
mod tests;

pub use events::{extract_events, extract_past_events};
pub use feed::{extract_news, extract_streams, extract_threads};
pub use map_stats::extract_match_map_stats;
pub use matches::extract_matches;
pub use matches_stats::extract_matches_stats;
pub use ranking::{country_ranking_path, extract_player_ranking, extract_team_ranking};
pub use results::extract_results;
pub use search::first_team_id;
pub use team::extract_team;

use crate::entities::Country;
use crate::error::HltvError;
use crate::query::Selection;
use crate::query::number::file_stem;

/// Unwraps a field the page schema guarantees.
fn required<T>(value: Option<T>, what: &str) -> Result<T, HltvError> {
    value.ok_or_else(|| HltvError::malformed(format!("missing {what}")))
}

/// Trimmed text, empty when the node is absent.
fn text(selection: &Selection<'_>) -> String {
    selection.trim_text().unwrap_or_default()
}

/// Country from a display name and a flag image whose file name is the code.
fn country(name: impl Into<String>, flag: &Selection<'_>) -> Country {
    Country {
        name: name.into(),
        code: file_stem(flag.attr("src")).map(str::to_string),
    }
}
