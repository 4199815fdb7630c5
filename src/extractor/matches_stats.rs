use crate::entities::{Event, GameMap, Listing, MatchStatsPreview, Score, Team};
use crate::error::HltvError;
use crate::query::number::{parse_number, query_param, strip_parens};
use crate::query::{Page, Selection};

use super::{required, text};

/// Row selector of the map statistics listing.
pub const MATCH_STATS_ROWS: &str = ".matches-table tbody tr";

/// One page of `/stats/matches`.
///
/// The map stats id is path segment 4 of `/stats/matches/mapstatsid/{id}/{slug}`;
/// team ids are segment 3 of `/stats/teams/{id}/{slug}`.
pub fn extract_matches_stats(page: &Page) -> Result<Listing<MatchStatsPreview>, HltvError> {
    page.select(MATCH_STATS_ROWS)
        .iter()
        .map(|row| stats_row(&row))
        .collect::<Result<Vec<_>, _>>()
        .map(Listing::new)
}

fn stats_row(row: &Selection<'_>) -> Result<MatchStatsPreview, HltvError> {
    let map_stats_id = required(row.find(".date-col a").id_at("href", 4), "map stats id")?;
    let teams = row.find(".team-col a");
    let event_link = row.find(".event-col a");
    let scores = row.find(".team-col .score");

    let result = match (round_score(&scores.first()), round_score(&scores.last())) {
        (Some(team1), Some(team2)) if scores.len() >= 2 => Some(Score { team1, team2 }),
        _ => None,
    };

    Ok(MatchStatsPreview {
        map_stats_id,
        date: row.find(".time").num_from_attr("data-unix"),
        team1: team(&teams.first()),
        team2: team(&teams.last()),
        event: Event {
            id: query_param(event_link.attr("href"), "event").and_then(|id| parse_number(&id)),
            name: text(&event_link),
        },
        map: GameMap::from_slug(&row.find(".dynamic-map-name-short").text()),
        result,
    })
}

fn team(link: &Selection<'_>) -> Team {
    Team {
        id: link.id_at("href", 3),
        name: text(link),
    }
}

/// Scores are printed as `"(16)"`.
fn round_score(cell: &Selection<'_>) -> Option<u32> {
    parse_number(&strip_parens(&cell.text()))
}
