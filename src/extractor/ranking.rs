use crate::entities::{Listing, Player, PlayerRanking, Team, TeamRanking};
use crate::error::HltvError;
use crate::query::Page;
use crate::query::number::{parse_number, strip_parens};

use super::{required, text};

/// Row selector of the player ranking table.
pub const PLAYER_RANKING_ROWS: &str = ".player-ratings-table tbody tr";

/// Team ranking rows. Team ids are path segment 2 of the `/team/{id}/{slug}`
/// "more" link.
pub fn extract_team_ranking(page: &Page) -> Result<Vec<TeamRanking>, HltvError> {
    let teams = page
        .select(".ranked-team")
        .iter()
        .map(|row| {
            // "(1000 points)"
            let points = strip_parens(&row.find(".points").text());
            let position = text(&row.find(".position"));
            let change_text = text(&row.find(".change"));
            let is_new = change_text == "NEW TEAM";
            let change = if is_new || change_text == "-" {
                Some(0)
            } else {
                parse_number(&change_text)
            };

            TeamRanking {
                team: Team {
                    id: row.find(".moreLink").id_at("href", 2),
                    name: text(&row.find(".name")),
                },
                points: points.split_whitespace().next().and_then(parse_number),
                place: position.strip_prefix('#').and_then(parse_number),
                change,
                is_new,
            }
        })
        .collect();

    Ok(teams)
}

/// Path of the country ranking published alongside a world ranking.
///
/// The world ranking page links every country ranking of the same date as
/// `/ranking/teams/{year}/{month}/{day}/country/{country}`; swapping the last
/// segment selects another country.
pub fn country_ranking_path(page: &Page, country: &str) -> Result<String, HltvError> {
    let link = page.select(".ranking-country > a").first().attr_opt("href");
    let link = required(link, "country ranking link")?;
    let (prefix, _) = link
        .trim_end_matches('/')
        .rsplit_once('/')
        .ok_or_else(|| HltvError::malformed(format!("unexpected country ranking link {link:?}")))?;
    Ok(format!("{prefix}/{country}"))
}

/// The player ranking table. Player and team ids are path segment 3 of
/// `/stats/players/{id}/{slug}` and `/stats/teams/{id}/{slug}`.
pub fn extract_player_ranking(page: &Page) -> Result<Listing<PlayerRanking>, HltvError> {
    let rates_v2 = page.select(".ratingCol .ratingDesc").first().trim_text().as_deref() == Some("2.0");

    let records = page
        .select(PLAYER_RANKING_ROWS)
        .iter()
        .map(|row| {
            let link = row.find(".playerCol a");
            let details = row.find("td.statsDetail");
            let rating: Option<f64> = row.find("td.ratingCol").num_from_text();

            PlayerRanking {
                player: Player {
                    id: link.id_at("href", 3),
                    name: text(&link),
                },
                teams: row
                    .find(".teamCol a")
                    .iter()
                    .map(|team| Team {
                        id: team.id_at("href", 3),
                        name: team.find("img").attr("title").to_string(),
                    })
                    .collect(),
                maps: details.nth(0).num_from_text(),
                rounds: details.nth(1).num_from_text(),
                kd_diff: row.find("td.kdDiffCol").num_from_text(),
                kd: details.nth(2).num_from_text(),
                rating1: rating.filter(|_| !rates_v2),
                rating2: rating.filter(|_| rates_v2),
            }
        })
        .collect();

    Ok(Listing::new(records))
}
