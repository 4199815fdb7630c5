use crate::entities::{
    Event, MatchLineup, MatchPreview, MatchTeam, MatchesOverview, UpcomingEventMatches,
};
use crate::error::HltvError;
use crate::query::{Page, Selection};

use super::{required, text};

/// Live matches, then upcoming matches grouped by event block.
///
/// The first event block on the page is the live section and is skipped when
/// grouping upcoming matches.
pub fn extract_matches(page: &Page) -> Result<MatchesOverview, HltvError> {
    let events: Vec<Event> = page
        .select(".event-headline-wrapper")
        .iter()
        .map(|el| Event {
            id: el.num_from_attr("data-event-id"),
            name: el.attr("data-event-headline").to_string(),
        })
        .collect();

    let live_matches = page
        .select(r#".match-wrapper[live="true"]"#)
        .iter()
        .map(|row| match_row(&row, &events, true))
        .collect::<Result<Vec<_>, _>>()?;

    let mut upcoming_matches_by_event = Vec::new();
    for block in page.select(".matches-event-wrapper").iter().skip(1) {
        let matches = block
            .find(r#".match-wrapper:not([live="true"])"#)
            .iter()
            .map(|row| match_row(&row, &events, false))
            .collect::<Result<Vec<_>, _>>()?;
        let event = matches.first().and_then(|m| m.event.clone());
        upcoming_matches_by_event.push(UpcomingEventMatches { event, matches });
    }

    Ok(MatchesOverview {
        live_matches,
        upcoming_matches_by_event,
    })
}

fn match_row(row: &Selection<'_>, events: &[Event], live: bool) -> Result<MatchPreview, HltvError> {
    let id = required(row.num_from_attr("data-match-id"), "match id")?;
    let event_id: Option<u64> = row.num_from_attr("data-event-id");
    let event = event_id.and_then(|id| events.iter().find(|e| e.id == Some(id)).cloned());

    let placeholder = row.find(".line-clamp-3");
    let lineup = if placeholder.exists() {
        MatchLineup::Info {
            message: text(&placeholder),
        }
    } else {
        let teams = row.find(".match-teams .match-team");
        MatchLineup::Teams {
            team1: match_team(&teams.nth(0)),
            team2: match_team(&teams.nth(1)),
        }
    };

    Ok(MatchPreview {
        id,
        date: row.find(".match-time").num_from_attr("data-unix"),
        stars: row.num_from_attr("data-stars"),
        format: row.find(".match-meta:nth-child(2)").trim_text(),
        stage: row.find(".match-stage").trim_text(),
        event,
        live,
        lineup,
    })
}

fn match_team(team: &Selection<'_>) -> MatchTeam {
    MatchTeam {
        name: text(&team.find(".match-teamname")),
        logo: team
            .find("img.match-team-logo")
            .attr_opt("src")
            .map(str::to_string),
    }
}
