use tracing::warn;

use crate::entities::{FullMatchResult, GameMap, Listing, ResultEvent, ResultTeam, Score};
use crate::error::HltvError;
use crate::query::number::parse_number;
use crate::query::{Page, Selection};

use super::text;

/// Row selector of the results listing; also matches featured rows.
pub const RESULT_ROWS: &str = ".result-con";

/// One page of `/results`, in page order, featured rows included.
///
/// The match id is path segment 2 of the row's `/matches/{id}/{slug}` link.
/// Rows without an id or with an unreadable score are dropped and counted in
/// [`Listing::skipped`]; duplicates across the featured block and the main
/// list are left to the caller.
pub fn extract_results(page: &Page) -> Result<Listing<FullMatchResult>, HltvError> {
    let mut listing = Listing::default();

    for row in page.select(RESULT_ROWS).iter() {
        match result_row(&row) {
            Ok(record) => listing.records.push(record),
            Err(reason) => {
                warn!(%reason, "dropping unreadable result row");
                listing.skipped += 1;
            }
        }
    }

    Ok(listing)
}

fn result_row(row: &Selection<'_>) -> Result<FullMatchResult, String> {
    let id = row
        .children()
        .first()
        .id_at("href", 2)
        .ok_or_else(|| "result row without match link".to_string())?;

    let score_text = text(&row.find(".result-score").first());
    let result = parse_score(&score_text)
        .ok_or_else(|| format!("invalid score {score_text:?} for match {id}"))?;

    let teams = row.find("div.team");
    let logos = row.find("img.team-logo");
    let map_text = text(&row.find(".map-text"));
    let (format, map) = if map_text.contains("bo") {
        (map_text, None)
    } else {
        ("bo1".to_string(), Some(GameMap::from_slug(&map_text)))
    };

    Ok(FullMatchResult {
        id,
        date: row.num_from_attr("data-zonedgrouping-entry-unix"),
        team1: ResultTeam {
            name: text(&teams.first()),
            logo: logos.first().attr_opt("src").map(str::to_string),
        },
        team2: ResultTeam {
            name: text(&teams.last()),
            logo: logos.last().attr_opt("src").map(str::to_string),
        },
        event: ResultEvent {
            name: text(&row.find(".event-name")),
            logo: row
                .find("img.event-logo")
                .first()
                .attr_opt("src")
                .map(str::to_string),
        },
        stars: u8::try_from(row.find(".stars i").len()).unwrap_or(u8::MAX),
        format,
        map,
        result,
    })
}

/// Parses `"2 - 1"`.
fn parse_score(raw: &str) -> Option<Score> {
    let (team1, team2) = raw.split_once(" - ")?;
    Some(Score {
        team1: parse_number(team1)?,
        team2: parse_number(team2)?,
    })
}
