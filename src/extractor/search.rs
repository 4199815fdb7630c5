use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::error::HltvError;

/// A browser renders the search endpoint's JSON answer inside a `<pre>` block.
static SEARCH_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pre>(\[.*?\])</pre>").unwrap());

#[derive(Deserialize)]
struct SearchGroup {
    #[serde(default)]
    teams: Vec<SearchTeam>,
}

#[derive(Deserialize)]
struct SearchTeam {
    id: u64,
}

/// Id of the best team match for a search.
///
/// Accepts the raw JSON body or the same JSON wrapped in browser markup.
/// Returns `NotFound` when the search matched no team and `MalformedResponse`
/// when the answer is missing or unreadable.
pub fn first_team_id(markup: &str, name: &str) -> Result<u64, HltvError> {
    let trimmed = markup.trim();
    let json = if trimmed.starts_with('[') {
        trimmed
    } else {
        SEARCH_JSON
            .captures(markup)
            .and_then(|caps| caps.get(1))
            .map(|json| json.as_str())
            .ok_or_else(|| HltvError::malformed(format!("search results for team {name:?}")))?
    };

    let groups: Vec<SearchGroup> = serde_json::from_str(json)
        .map_err(|e| HltvError::malformed(format!("search results for team {name:?}: {e}")))?;

    groups
        .first()
        .and_then(|group| group.teams.first())
        .map(|team| team.id)
        .ok_or_else(|| HltvError::NotFound(format!("team {name:?}")))
}
