use std::collections::HashMap;

use crate::entities::{EventPreview, EventType, Listing, PastEventPreview};
use crate::error::HltvError;
use crate::query::number::parse_number;
use crate::query::{Page, Selection};

use super::{country, required, text};

/// Row selector of the events archive.
pub const PAST_EVENT_ROWS: &str = "a.small-event";

const ONGOING_ROWS: &str = r#".tab-content[id="ALL"] a.ongoing-event"#;

/// Ongoing events, then big and small upcoming events, in page order.
///
/// An ongoing event is `featured` when it is also shown in the highlighted
/// block above the full list. Big events are always featured.
pub fn extract_events(page: &Page) -> Result<Vec<EventPreview>, HltvError> {
    let featured = featured_ongoing_ids(page);
    let mut events = Vec::new();

    for row in page.select(ONGOING_ROWS).iter() {
        let id = required(row.id_at("href", 2), "ongoing event id")?;
        let dates = row.find("tr.eventDetails span[data-unix]");
        events.push(EventPreview {
            id,
            name: text(&row.find(".event-name-small .text-ellipsis")),
            date_start: dates.first().num_from_attr("data-unix"),
            date_end: dates.last().num_from_attr("data-unix"),
            location: None,
            prize_pool: None,
            number_of_teams: None,
            featured: featured.contains(&id),
        });
    }

    for row in page.select("a.big-event").iter() {
        let id = required(row.id_at("href", 2), "big event id")?;
        let dates = row.find(".additional-info .col-date span[data-unix]");
        let location_name = text(&row.find(".big-event-location"));
        let location = (!location_name.is_empty() && location_name != "TBA")
            .then(|| country(location_name, &row.find(".location-top-teams img.flag")));
        let details = row.find(".additional-info tr").first().find("td");

        events.push(EventPreview {
            id,
            name: text(&row.find(".big-event-name")),
            date_start: dates.first().num_from_attr("data-unix"),
            date_end: dates.last().num_from_attr("data-unix"),
            location,
            prize_pool: details.nth(1).trim_text(),
            number_of_teams: team_count(&details.nth(2)),
            featured: true,
        });
    }

    for row in page.select("a.small-event").iter() {
        let small = small_event(&row)?;
        events.push(EventPreview {
            id: small.id,
            name: small.name,
            date_start: small.date_start,
            date_end: small.date_end,
            location: small.location,
            prize_pool: small.prize_pool,
            number_of_teams: small.number_of_teams,
            featured: false,
        });
    }

    Ok(events)
}

/// One page of the events archive.
pub fn extract_past_events(page: &Page) -> Result<Listing<PastEventPreview>, HltvError> {
    page.select(PAST_EVENT_ROWS)
        .iter()
        .map(|row| small_event(&row))
        .collect::<Result<Vec<_>, _>>()
        .map(Listing::new)
}

fn featured_ongoing_ids(page: &Page) -> Vec<u64> {
    // The full list repeats every featured event; ids seen more often than in
    // the full list are the highlighted ones.
    let mut counts: HashMap<u64, i32> = HashMap::new();
    for row in page.select("a.ongoing-event").iter() {
        if let Some(id) = row.id_at("href", 2) {
            *counts.entry(id).or_default() += 1;
        }
    }
    for row in page.select(ONGOING_ROWS).iter() {
        if let Some(id) = row.id_at("href", 2) {
            *counts.entry(id).or_default() -= 1;
        }
    }
    counts
        .into_iter()
        .filter_map(|(id, extra)| (extra > 0).then_some(id))
        .collect()
}

/// Parses a compact event row, shared by the upcoming list and the archive.
fn small_event(row: &Selection<'_>) -> Result<PastEventPreview, HltvError> {
    let id = required(row.id_at("href", 2), "event id")?;
    let header = row.find(".table tr").first().find("td");
    let dates = row.find("td span[data-unix]");

    // "Europe | " style label
    let location_name = row.find(".smallCountry .col-desc").text().replace(" | ", "");
    let location_name = location_name.trim();
    let location = (!location_name.is_empty())
        .then(|| country(location_name, &row.find(".smallCountry img.flag")));
    let prize_pool = row.find(".prizePoolEllipsis");

    Ok(PastEventPreview {
        id,
        name: text(&header.first().find(".text-ellipsis")),
        event_type: EventType::from_text(&header.last().text()),
        date_start: dates.first().num_from_attr("data-unix"),
        date_end: dates.last().num_from_attr("data-unix"),
        location,
        prize_pool: prize_pool.trim_text(),
        number_of_teams: team_count(&prize_pool.prev()),
    })
}

/// Team counts are printed as `"16"` or `"16+"`.
fn team_count(cell: &Selection<'_>) -> Option<u32> {
    parse_number(&cell.text().replace('+', ""))
}
