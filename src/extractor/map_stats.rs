//! Map statistics: an overview page and a performance page for the same
//! map, joined on player id.
//!
//! Player ids are path segment 3 of `/stats/players/{id}/{slug}` links on the
//! overview page and segment 2 of `/player/{id}/{slug}` links on the
//! performance page. Players listed only on the performance page are dropped.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::entities::{
    Event, FullMatchMapStats, GameMap, HalfResult, MapResult, MapStatsOverview, MostX, Outcome,
    Player, PlayerStats, PlayerStatsByTeam, RoundOutcome, Team, TeamPerformance, TeamStatPair,
    TeamsPerformanceOverview,
};
use crate::error::HltvError;
use crate::query::number::{file_stem, parse_number, query_param, strip_parens};
use crate::query::{Page, Selection};

use super::{required, text};

/// A half score printed as `( 9 : 6 )`.
static HALF_RESULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*(\d+)\s*:\s*(\d+)\s*\)").unwrap());

pub fn extract_match_map_stats(
    id: u64,
    overview: &Page,
    performance: &Page,
) -> Result<FullMatchMapStats, HltvError> {
    let result = MapResult {
        team1_total_rounds: required(
            overview.select(".team-left .bold").first().num_from_text(),
            "team 1 round total",
        )?,
        team2_total_rounds: required(
            overview.select(".team-right .bold").first().num_from_text(),
            "team 2 round total",
        )?,
        half_results: half_results(&overview.select(".match-info-row .right").nth(0).text()),
    };

    let team1 = Team {
        id: overview.select(".team-left a").id_at("href", 3),
        name: overview.select(".team-left .team-logo").attr("title").to_string(),
    };
    let team2 = Team {
        id: overview.select(".team-right a").id_at("href", 3),
        name: overview.select(".team-right .team-logo").attr("title").to_string(),
    };

    let event_link = overview.select(".match-info-box .text-ellipsis").first();
    let event = Event {
        id: query_param(event_link.attr("href"), "event").and_then(|id| parse_number(&id)),
        name: text(&event_link),
    };

    let info_box = overview.select(".match-info-box");

    Ok(FullMatchMapStats {
        id,
        match_id: overview.select(".match-page-link").id_at("href", 2),
        map: GameMap::from_name(&text(&info_box.contents().nth(3))),
        date: overview
            .select(".match-info-box span[data-time-format]")
            .num_from_attr("data-unix"),
        round_history: round_history(overview, &team1, &team2),
        overview: stats_overview(overview),
        player_stats: player_stats(overview, performance),
        performance_overview: performance_overview(performance),
        result,
        team1,
        team2,
        event,
    })
}

fn half_results(raw: &str) -> Vec<HalfResult> {
    HALF_RESULT
        .captures_iter(raw)
        .filter_map(|caps| {
            Some(HalfResult {
                team1_rounds: parse_number(&caps[1])?,
                team2_rounds: parse_number(&caps[2])?,
            })
        })
        .collect()
}

/// One round icon. `outcome` is `None` for the empty placeholder shown in
/// the losing team's row.
struct RoundIcon {
    outcome: Option<Outcome>,
    score: String,
}

fn quadrant(page: &Page, index: usize) -> Vec<RoundIcon> {
    page.select(".round-history-half")
        .nth(index)
        .find("img")
        .iter()
        .map(|img| RoundIcon {
            outcome: file_stem(img.attr("src")).and_then(Outcome::from_icon),
            score: img.attr("title").to_string(),
        })
        .collect()
}

/// Rebuilds the round sequence from the four round-history quadrants.
///
/// Quadrants are team 1 first half, team 1 second half, team 2 first half
/// and team 2 second half. Each round has an icon in the winner's row and a
/// placeholder in the loser's.
fn round_history(page: &Page, team1: &Team, team2: &Team) -> Vec<RoundOutcome> {
    let top_left = quadrant(page, 0);
    let top_right = quadrant(page, 1);
    let bottom_left = quadrant(page, 2);
    let bottom_right = quadrant(page, 3);
    let first_half_len = top_left.len();

    // Sides are fixed once from the first round team 1 won in the first half,
    // or from team 2's first win when team 1 won none.
    let team1_starts_ct = top_left
        .iter()
        .find_map(|icon| icon.outcome)
        .map(Outcome::is_ct_win)
        .or_else(|| {
            bottom_left
                .iter()
                .find_map(|icon| icon.outcome)
                .map(|outcome| !outcome.is_ct_win())
        })
        .unwrap_or(false);

    let team1_rounds: Vec<&RoundIcon> = top_left.iter().chain(&top_right).collect();
    let team2_rounds: Vec<&RoundIcon> = bottom_left.iter().chain(&bottom_right).collect();

    team1_rounds
        .iter()
        .enumerate()
        .filter_map(|(i, t1)| {
            let t2 = team2_rounds.get(i);
            let (outcome, score) = match (t1.outcome, t2.and_then(|t2| t2.outcome)) {
                (Some(outcome), _) => (outcome, t1.score.clone()),
                (None, Some(outcome)) => (outcome, t2.map(|t2| t2.score.clone())?),
                (None, None) => return None,
            };

            let team1_is_ct = (i < first_half_len) == team1_starts_ct;
            let (ct_team, t_team) = if team1_is_ct {
                (team1.id, team2.id)
            } else {
                (team2.id, team1.id)
            };

            Some(RoundOutcome {
                outcome,
                score,
                t_team,
                ct_team,
            })
        })
        .collect()
}

enum OverviewKey {
    Rating,
    FirstKills,
    ClutchesWon,
    MostKills,
    MostDamage,
    MostAssists,
    MostAwpKills,
    MostFirstKills,
    BestRating1,
    BestRating2,
}

impl OverviewKey {
    fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Team rating" => Some(Self::Rating),
            "First kills" => Some(Self::FirstKills),
            "Clutches won" => Some(Self::ClutchesWon),
            "Most kills" => Some(Self::MostKills),
            "Most damage" => Some(Self::MostDamage),
            "Most assists" => Some(Self::MostAssists),
            "Most AWP kills" => Some(Self::MostAwpKills),
            "Most first kills" => Some(Self::MostFirstKills),
            "Best rating 1.0" => Some(Self::BestRating1),
            "Best rating 2.0" => Some(Self::BestRating2),
            _ => None,
        }
    }
}

fn stats_overview(page: &Page) -> MapStatsOverview {
    let mut overview = MapStatsOverview::default();

    for row in page.select(".match-info-row").iter().skip(1) {
        let Some(key) = OverviewKey::from_label(&row.find(".bold").text()) else {
            continue;
        };
        let value = row.find(".right").text();
        let mut sides = value.split(" : ");
        let pair = TeamStatPair {
            team1: sides.next().and_then(parse_number),
            team2: sides.next().and_then(parse_number),
        };
        match key {
            OverviewKey::Rating => overview.rating = Some(pair),
            OverviewKey::FirstKills => overview.first_kills = Some(pair),
            OverviewKey::ClutchesWon => overview.clutches_won = Some(pair),
            _ => {}
        }
    }

    for box_el in page.select(".most-x-box").iter() {
        let Some(key) = OverviewKey::from_label(&box_el.find(".most-x-title").text()) else {
            continue;
        };
        let link = box_el.find(".name > a");
        let most = MostX {
            id: link.id_at("href", 3),
            name: text(&link),
            value: box_el.find(".valueName").num_from_text(),
        };
        let slot = match key {
            OverviewKey::MostKills => &mut overview.most_kills,
            OverviewKey::MostDamage => &mut overview.most_damage,
            OverviewKey::MostAssists => &mut overview.most_assists,
            OverviewKey::MostAwpKills => &mut overview.most_awp_kills,
            OverviewKey::MostFirstKills => &mut overview.most_first_kills,
            OverviewKey::BestRating1 => &mut overview.best_rating1,
            OverviewKey::BestRating2 => &mut overview.best_rating2,
            _ => continue,
        };
        *slot = Some(most);
    }

    overview
}

#[derive(Default, Clone, Copy)]
struct Performance {
    kills_per_round: Option<f64>,
    deaths_per_round: Option<f64>,
    impact: Option<f64>,
}

/// Reads `label` followed by a value up to the next quote from the chart
/// configuration blob.
fn chart_value(config: &str, label: &str) -> Option<f64> {
    let (_, rest) = config.split_once(label)?;
    parse_number(rest.split('"').next()?)
}

fn performance_by_player(page: &Page) -> HashMap<u64, Performance> {
    page.select(".highlighted-player")
        .iter()
        .filter_map(|el| {
            let id = el.find(".headline span a").id_at("href", 2)?;
            let config = el.find(".graph.small").attr("data-fusionchart-config");
            Some((
                id,
                Performance {
                    kills_per_round: chart_value(config, "Kills per round: "),
                    deaths_per_round: chart_value(config, "Deaths / round: "),
                    impact: chart_value(config, "Impact rating: "),
                },
            ))
        })
        .collect()
}

fn player_stats(overview: &Page, performance: &Page) -> PlayerStatsByTeam {
    let performance = performance_by_player(performance);
    let tables = overview.select(".stats-table:not(.hidden)");

    PlayerStatsByTeam {
        team1: team_rows(&tables.first(), &performance),
        team2: team_rows(&tables.last(), &performance),
    }
}

fn team_rows(table: &Selection<'_>, performance: &HashMap<u64, Performance>) -> Vec<PlayerStats> {
    // The rating column header names the rating version.
    let rates_v2 = table.find(".st-rating .ratingDesc").trim_text().as_deref() == Some("2.0");
    table
        .find("tbody tr")
        .iter()
        .map(|row| player_row(&row, rates_v2, performance))
        .collect()
}

fn player_row(
    row: &Selection<'_>,
    rates_v2: bool,
    performance: &HashMap<u64, Performance>,
) -> PlayerStats {
    let link = row.find(".st-player a");
    let id = link.id_at("href", 3);
    let perf = id
        .and_then(|id| performance.get(&id).copied())
        .unwrap_or_default();
    let rating: Option<f64> = row.find(".st-rating").contents().first().num_from_text();

    PlayerStats {
        player: Player {
            id,
            name: text(&link),
        },
        kills: row.find(".st-kills").contents().first().num_from_text(),
        hs_kills: parse_number(&strip_parens(&row.find(".st-kills .gtSmartphone-only").text())),
        assists: row.find(".st-assists").contents().first().num_from_text(),
        flash_assists: parse_number(&strip_parens(
            &row.find(".st-assists .gtSmartphone-only").text(),
        )),
        deaths: row.find(".st-deaths").contents().first().num_from_text(),
        kast: parse_number(&row.find(".st-kdratio").text().replace('%', "")),
        kill_deaths_difference: row.find(".st-kddiff").num_from_text(),
        adr: row.find(".st-adr").num_from_text(),
        first_kills_difference: row.find(".st-fkdiff").num_from_text(),
        rating1: rating.filter(|_| !rates_v2),
        rating2: rating.filter(|_| rates_v2),
        kills_per_round: perf.kills_per_round,
        deaths_per_round: perf.deaths_per_round,
        impact: perf.impact,
    }
}

fn performance_overview(page: &Page) -> TeamsPerformanceOverview {
    let mut overview = TeamsPerformanceOverview::default();

    for row in page.select(".overview-table tr").iter().skip(1) {
        let label = row.find(".name-column").text().trim().to_lowercase();
        let team1 = row.find(".team1-column").num_from_text();
        let team2 = row.find(".team2-column").num_from_text();
        let set = |side: &mut TeamPerformance, value: Option<u32>| match label.as_str() {
            "kills" => side.kills = value,
            "deaths" => side.deaths = value,
            "assists" => side.assists = value,
            _ => {}
        };
        set(&mut overview.team1, team1);
        set(&mut overview.team2, team2);
    }

    overview
}
