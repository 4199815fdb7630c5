use serde::Deserialize;

use crate::entities::{Article, FullTeam, FullTeamPlayer, TeamPlayerType};
use crate::error::HltvError;
use crate::query::number::parse_number;
use crate::query::{Page, Selection};

use super::{country, required, text};

const PLAYER_NICK: &str = ".playersBox-playernick-image .playersBox-playernick .text-ellipsis";

/// A team profile. Player ids are path segment 2 of `/player/{id}/{slug}`.
pub fn extract_team(id: u64, page: &Page) -> Result<FullTeam, HltvError> {
    let name = required(page.select(".profile-team-name").trim_text(), "team name")?;

    let logo = page
        .select(".teamlogo")
        .attr_opt("src")
        .filter(|src| !src.contains("placeholder.svg"))
        .map(str::to_string);

    let social = |class: &str| {
        page.select(class)
            .parent()
            .attr_opt("href")
            .map(str::to_string)
    };

    let flag = page.select(".team-country .flag");

    Ok(FullTeam {
        id,
        name,
        logo,
        facebook: social(".facebook"),
        twitter: social(".twitter"),
        instagram: social(".instagram"),
        country: country(flag.attr("alt"), &flag),
        rank: parse_number(
            &page
                .select(".profile-team-stat .right")
                .first()
                .text()
                .replace('#', ""),
        ),
        players: roster(page),
        ranking_development: ranking_development(page.select(".graph").attr("data-fusionchart-config")),
        news: page
            .select("#newsBox a")
            .iter()
            .map(|link| Article {
                name: text(&link.contents().nth(1)),
                link: link.attr("href").to_string(),
            })
            .collect(),
    })
}

fn roster(page: &Page) -> Vec<FullTeamPlayer> {
    let mut players: Vec<FullTeamPlayer> = page
        .select(".players-table tbody tr")
        .iter()
        .map(|row| {
            let cells = row.find("td");
            FullTeamPlayer {
                id: player_id(&row),
                name: text(&row.find(PLAYER_NICK)),
                time_on_team: cells.nth(2).trim_text(),
                maps_played: cells.nth(3).num_from_text(),
                player_type: TeamPlayerType::from_status(&row.find(".player-status").text()),
            }
        })
        .collect();

    let coach = page.select(".coach-table");
    if coach.exists() {
        let cells = coach.find("tbody tr").first().find("td");
        players.push(FullTeamPlayer {
            id: player_id(&coach),
            name: text(&coach.find(PLAYER_NICK)),
            time_on_team: cells.nth(1).trim_text(),
            maps_played: cells.nth(2).num_from_text(),
            player_type: Some(TeamPlayerType::Coach),
        });
    }

    players
}

fn player_id(scope: &Selection<'_>) -> Option<u64> {
    scope
        .find(".playersBox-playernick-image")
        .first()
        .id_at("href", 2)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankingChart {
    data_source: ChartSource,
}

#[derive(Deserialize)]
struct ChartSource {
    dataset: Vec<ChartSeries>,
}

#[derive(Deserialize)]
struct ChartSeries {
    data: Vec<ChartPoint>,
}

#[derive(Deserialize)]
struct ChartPoint {
    value: Option<serde_json::Value>,
}

/// World ranking positions plotted on the profile chart, oldest first.
/// Unreadable chart data yields an empty history.
fn ranking_development(config: &str) -> Vec<Option<u32>> {
    let Ok(chart) = serde_json::from_str::<RankingChart>(config) else {
        return Vec::new();
    };
    let Some(series) = chart.data_source.dataset.into_iter().next() else {
        return Vec::new();
    };

    series
        .data
        .into_iter()
        .map(|point| match point.value {
            Some(serde_json::Value::String(s)) => parse_number(&s),
            Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            _ => None,
        })
        .collect()
}
