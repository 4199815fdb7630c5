use std::fs;

use crate::entities::{
    EventType, GameMap, MatchLineup, Outcome, StreamCategory, TeamPlayerType, ThreadCategory,
};
use crate::error::HltvError;
use crate::extractor::{
    extract_events, extract_match_map_stats, extract_matches, extract_matches_stats,
    extract_news, extract_past_events, extract_player_ranking, extract_results, extract_streams,
    extract_team, extract_team_ranking, extract_threads,
};
use crate::query::Page;

fn fixture(name: &str) -> Page {
    let markup = fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture");
    Page::parse(&markup)
}

#[test]
fn test_extract_events() {
    let events = extract_events(&fixture("events.html")).unwrap();

    assert_eq!(events.len(), 5);

    let major = &events[0];
    assert_eq!(major.id, 7148);
    assert_eq!(major.name, "PGL Major Copenhagen 2024");
    assert_eq!(major.date_start, Some(1_710_460_800_000));
    assert_eq!(major.date_end, Some(1_711_929_600_000));
    assert!(major.featured);

    // Single date span: first and last are the same node.
    let challenger = &events[1];
    assert!(!challenger.featured);
    assert_eq!(challenger.date_start, challenger.date_end);

    let cologne = &events[2];
    assert_eq!(cologne.name, "IEM Cologne 2024");
    let location = cologne.location.as_ref().unwrap();
    assert_eq!(location.name, "Cologne, Germany");
    assert_eq!(location.code.as_deref(), Some("DE"));
    assert_eq!(cologne.prize_pool.as_deref(), Some("$1,000,000"));
    assert_eq!(cologne.number_of_teams, Some(24));
    assert!(cologne.featured);

    let world_final = &events[3];
    assert_eq!(world_final.location, None);
    assert_eq!(world_final.number_of_teams, Some(8));

    let cct = &events[4];
    assert_eq!(cct.id, 7700);
    assert!(!cct.featured);
    assert_eq!(cct.location.as_ref().unwrap().name, "Europe");
    assert_eq!(cct.location.as_ref().unwrap().code.as_deref(), Some("EU"));
    assert_eq!(cct.number_of_teams, Some(16));
    assert_eq!(cct.prize_pool.as_deref(), Some("$50,000"));
}

#[test]
fn test_extract_past_events() {
    let listing = extract_past_events(&fixture("past_events.html")).unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing.skipped, 0);

    let world_final = &listing.records[0];
    assert_eq!(world_final.id, 6793);
    assert_eq!(world_final.event_type, Some(EventType::InternationalLan));
    assert_eq!(world_final.number_of_teams, Some(8));
    assert_eq!(
        world_final.location.as_ref().unwrap().name,
        "Abu Dhabi, United Arab Emirates"
    );

    // Unknown labels are left absent; "16+" loses its plus sign.
    let sydney = &listing.records[1];
    assert_eq!(sydney.event_type, None);
    assert_eq!(sydney.number_of_teams, Some(16));
    assert_eq!(sydney.date_end, Some(1_698_019_200_000));
}

#[test]
fn test_extract_matches() {
    let overview = extract_matches(&fixture("matches.html")).unwrap();

    assert_eq!(overview.live_matches.len(), 1);
    let live = &overview.live_matches[0];
    assert_eq!(live.id, 2_370_001);
    assert!(live.live);
    assert_eq!(live.stars, Some(2));
    assert_eq!(live.format.as_deref(), Some("bo3"));
    assert_eq!(live.stage.as_deref(), Some("Playoffs"));
    assert_eq!(live.event.as_ref().unwrap().name, "PGL Major Copenhagen 2024");
    match &live.lineup {
        MatchLineup::Teams { team1, team2 } => {
            assert_eq!(team1.name, "Natus Vincere");
            assert_eq!(team1.logo.as_deref(), Some("/img/logo/4608.png"));
            assert_eq!(team2.name, "FaZe");
        }
        other => panic!("expected teams, got {other:?}"),
    }

    assert_eq!(overview.upcoming_matches_by_event.len(), 1);
    let group = &overview.upcoming_matches_by_event[0];
    assert_eq!(group.event.as_ref().unwrap().id, Some(7500));
    assert_eq!(group.matches.len(), 2);

    let upcoming = &group.matches[0];
    assert!(!upcoming.live);
    assert_eq!(upcoming.stage, None);
    match &upcoming.lineup {
        MatchLineup::Teams { team2, .. } => assert_eq!(team2.logo, None),
        other => panic!("expected teams, got {other:?}"),
    }

    assert_eq!(
        group.matches[1].lineup,
        MatchLineup::Info {
            message: "Winner of upper bracket final".to_string()
        }
    );
}

#[test]
fn test_extract_match_map_stats() {
    let stats = extract_match_map_stats(
        170_001,
        &fixture("map_stats_overview.html"),
        &fixture("map_stats_performance.html"),
    )
    .unwrap();

    assert_eq!(stats.id, 170_001);
    assert_eq!(stats.match_id, Some(2_370_001));
    assert_eq!(stats.map, GameMap::Mirage);
    assert_eq!(stats.date, Some(1_710_500_000_000));
    assert_eq!(stats.team1.id, Some(4608));
    assert_eq!(stats.team1.name, "Natus Vincere");
    assert_eq!(stats.team2.id, Some(6667));
    assert_eq!(stats.event.id, Some(7148));
    assert_eq!(stats.event.name, "PGL Major Copenhagen 2024");

    assert_eq!(stats.result.team1_total_rounds, 4);
    assert_eq!(stats.result.team2_total_rounds, 2);
    assert_eq!(stats.result.half_results.len(), 2);
    assert_eq!(stats.result.half_results[1].team2_rounds, 1);

    let rating = stats.overview.rating.unwrap();
    assert_eq!(rating.team1, Some(1.25));
    assert_eq!(rating.team2, Some(0.8));
    assert_eq!(stats.overview.clutches_won.unwrap().team1, Some(1.0));
    let most_kills = stats.overview.most_kills.as_ref().unwrap();
    assert_eq!(most_kills.id, Some(7998));
    assert_eq!(most_kills.value, Some(12.0));
    assert_eq!(stats.overview.most_damage.as_ref().unwrap().name, "rain");
    assert_eq!(stats.overview.most_assists, None);

    // Six rounds; team 1 opens on the CT side.
    let rounds = &stats.round_history;
    assert_eq!(rounds.len(), 6);
    assert_eq!(rounds[0].outcome, Outcome::CtWin);
    assert_eq!(rounds[0].ct_team, Some(4608));
    assert_eq!(rounds[1].outcome, Outcome::TWin);
    assert_eq!(rounds[1].score, "1-1");
    assert_eq!(rounds[1].t_team, Some(6667));
    assert_eq!(rounds[3].ct_team, Some(6667));
    assert_eq!(rounds[5].outcome, Outcome::BombExploded);
    assert_eq!(rounds[5].t_team, Some(4608));

    assert_eq!(stats.performance_overview.team1.kills, Some(30));
    assert_eq!(stats.performance_overview.team2.deaths, Some(30));
    assert_eq!(stats.performance_overview.team2.assists, Some(5));
}

#[test]
fn test_map_stats_joins_players_by_id() {
    let stats = extract_match_map_stats(
        170_001,
        &fixture("map_stats_overview.html"),
        &fixture("map_stats_performance.html"),
    )
    .unwrap();

    let team1 = &stats.player_stats.team1;
    assert_eq!(team1.len(), 1);
    let s1mple = &team1[0];
    assert_eq!(s1mple.player.id, Some(7998));
    assert_eq!(s1mple.kills, Some(12));
    assert_eq!(s1mple.hs_kills, Some(5));
    assert_eq!(s1mple.flash_assists, Some(1));
    assert_eq!(s1mple.kast, Some(83.3));
    assert_eq!(s1mple.kill_deaths_difference, Some(6));
    assert_eq!(s1mple.rating2, Some(1.45));
    assert_eq!(s1mple.rating1, None);
    assert_eq!(s1mple.kills_per_round, Some(2.0));
    assert_eq!(s1mple.impact, Some(1.8));

    // Listed on the overview only: no performance figures.
    let rain = &stats.player_stats.team2[0];
    assert_eq!(rain.player.name, "rain");
    assert_eq!(rain.first_kills_difference, Some(-2));
    assert_eq!(rain.kills_per_round, None);

    // Listed on the performance page only: dropped.
    let all_ids: Vec<Option<u64>> = team1
        .iter()
        .chain(&stats.player_stats.team2)
        .map(|p| p.player.id)
        .collect();
    assert!(!all_ids.contains(&Some(11111)));
}

fn round_history_page(quadrants: [Vec<&str>; 4]) -> Page {
    let half = |icons: &Vec<&str>| {
        let imgs: String = icons
            .iter()
            .enumerate()
            .map(|(i, icon)| {
                format!(r#"<img src="/img/static/scoreboard/{icon}.svg" title="r{i}">"#)
            })
            .collect();
        format!(r#"<div class="round-history-half">{imgs}</div>"#)
    };
    let markup = format!(
        r#"<html><body>
        <div class="team-left"><a href="/stats/teams/1/one"></a><div class="bold">15</div></div>
        <div class="team-right"><a href="/stats/teams/2/two"></a><div class="bold">15</div></div>
        <div class="round-history-team-row">{}{}</div>
        <div class="round-history-team-row">{}{}</div>
        </body></html>"#,
        half(&quadrants[0]),
        half(&quadrants[1]),
        half(&quadrants[2]),
        half(&quadrants[3]),
    );
    Page::parse(&markup)
}

#[test]
fn test_round_history_sides_follow_first_ct_icon() {
    // Team 1 wins odd rounds. It is CT in the first half, so its wins are
    // ct_win there and t_win after the switch; team 2 mirrors it.
    let icon = |won: bool, win_icon: &'static str| if won { win_icon } else { "emptyHistory" };
    let team1_first: Vec<&str> = (0..15).map(|i| icon(i % 2 == 1, "ct_win")).collect();
    let team1_second: Vec<&str> = (15..30).map(|i| icon(i % 2 == 1, "t_win")).collect();
    let team2_first: Vec<&str> = (0..15).map(|i| icon(i % 2 == 0, "t_win")).collect();
    let team2_second: Vec<&str> = (15..30).map(|i| icon(i % 2 == 0, "ct_win")).collect();

    let page = round_history_page([team1_first, team1_second, team2_first, team2_second]);
    let empty = Page::parse("<html></html>");
    let stats = extract_match_map_stats(1, &page, &empty).unwrap();

    let rounds = &stats.round_history;
    assert_eq!(rounds.len(), 30);
    for (i, round) in rounds.iter().enumerate() {
        if i < 15 {
            assert_eq!(round.ct_team, Some(1), "round {i}");
            assert_eq!(round.t_team, Some(2), "round {i}");
        } else {
            assert_eq!(round.ct_team, Some(2), "round {i}");
            assert_eq!(round.t_team, Some(1), "round {i}");
        }
    }
    assert_eq!(rounds[0].outcome, Outcome::TWin);
    assert_eq!(rounds[1].outcome, Outcome::CtWin);
}

#[test]
fn test_round_history_skips_unplayed_rounds() {
    let page = round_history_page([
        vec!["t_win", "emptyHistory"],
        vec!["emptyHistory", "emptyHistory"],
        vec!["emptyHistory", "ct_win"],
        vec!["t_win", "emptyHistory"],
    ]);
    let empty = Page::parse("<html></html>");
    let stats = extract_match_map_stats(1, &page, &empty).unwrap();

    let rounds = &stats.round_history;
    assert_eq!(rounds.len(), 3);
    // Team 1 opened on T and switched to CT.
    assert_eq!(rounds[0].t_team, Some(1));
    assert_eq!(rounds[1].ct_team, Some(2));
    assert_eq!(rounds[2].outcome, Outcome::TWin);
    assert_eq!(rounds[2].ct_team, Some(1));
    assert_eq!(rounds[2].t_team, Some(2));
}

#[test]
fn test_map_stats_without_round_totals_is_malformed() {
    let empty = Page::parse("<html><body></body></html>");
    let err = extract_match_map_stats(1, &empty, &empty).unwrap_err();
    assert!(matches!(err, HltvError::MalformedResponse(_)));
}

#[test]
fn test_extract_matches_stats() {
    let page = Page::parse(
        r#"<html><body><table class="stats-table matches-table"><tbody>
        <tr><td class="date-col"><a href="/stats/matches/mapstatsid/170001/navi-vs-faze"><div class="time" data-unix="1710500000000">15/3/24</div></a></td>
            <td class="team-col"><a href="/stats/teams/4608/natus-vincere">Natus Vincere</a> <span class="score">(13)</span></td>
            <td class="team-col"><a href="/stats/teams/6667/faze">FaZe</a> <span class="score">(7)</span></td>
            <td class="statsDetail"><div class="dynamic-map-name-short">mrg</div></td>
            <td class="event-col"><a href="/stats/matches?event=7148&amp;startDate=all">PGL Major Copenhagen 2024</a></td></tr>
        </tbody></table></body></html>"#,
    );

    let listing = extract_matches_stats(&page).unwrap();
    assert_eq!(listing.len(), 1);

    let row = &listing.records[0];
    assert_eq!(row.map_stats_id, 170_001);
    assert_eq!(row.date, Some(1_710_500_000_000));
    assert_eq!(row.team1.id, Some(4608));
    assert_eq!(row.team2.name, "FaZe");
    assert_eq!(row.event.id, Some(7148));
    assert_eq!(row.map, GameMap::Mirage);
    let result = row.result.unwrap();
    assert_eq!((result.team1, result.team2), (13, 7));
}

#[test]
fn test_extract_results_counts_dropped_rows() {
    let listing = extract_results(&fixture("results.html")).unwrap();

    // Featured row plus its repeat, one single-map row, one unreadable score.
    assert_eq!(listing.len(), 3);
    assert_eq!(listing.skipped, 1);

    let featured = &listing.records[0];
    assert_eq!(featured.id, 2_370_001);
    assert_eq!(featured.stars, 2);
    assert_eq!(featured.format, "bo3");
    assert_eq!(featured.map, None);
    assert_eq!(featured.team1.name, "Natus Vincere");
    assert_eq!(featured.team1.logo.as_deref(), Some("/img/logo/4608.png"));
    assert_eq!(featured.team2.name, "FaZe");
    assert_eq!((featured.result.team1, featured.result.team2), (2, 1));
    assert_eq!(featured.event.name, "PGL Major Copenhagen 2024");

    let single_map = &listing.records[2];
    assert_eq!(single_map.id, 2_370_002);
    assert_eq!(single_map.format, "bo1");
    assert_eq!(single_map.map, Some(GameMap::Mirage));
    assert_eq!(single_map.stars, 0);
    assert_eq!(single_map.date, Some(1_710_400_000_000));
}

#[test]
fn test_extract_team_ranking() {
    let teams = extract_team_ranking(&fixture("team_ranking.html")).unwrap();

    assert_eq!(teams.len(), 4);
    assert_eq!(teams[0].team.id, Some(4608));
    assert_eq!(teams[0].team.name, "Natus Vincere");
    assert_eq!(teams[0].points, Some(1000));
    assert_eq!(teams[0].place, Some(1));
    assert_eq!(teams[0].change, Some(2));
    assert!(!teams[0].is_new);

    assert_eq!(teams[1].change, Some(0));
    assert!(teams[2].is_new);
    assert_eq!(teams[2].change, Some(0));
    assert_eq!(teams[3].change, Some(-3));
}

#[test]
fn test_extract_player_ranking() {
    let listing = extract_player_ranking(&fixture("player_ranking.html")).unwrap();

    assert_eq!(listing.len(), 2);
    let s1mple = &listing.records[0];
    assert_eq!(s1mple.player.id, Some(7998));
    assert_eq!(s1mple.teams.len(), 2);
    assert_eq!(s1mple.teams[1].name, "Falcons");
    assert_eq!(s1mple.maps, Some(150));
    assert_eq!(s1mple.rounds, Some(4012));
    assert_eq!(s1mple.kd_diff, Some(900));
    assert_eq!(s1mple.kd, Some(1.35));
    assert_eq!(s1mple.rating2, Some(1.30));
    assert_eq!(s1mple.rating1, None);
}

#[test]
fn test_extract_streams_and_threads() {
    let page = fixture("home.html");

    let streams = extract_streams(&page).unwrap();
    assert_eq!(streams.len(), 2);
    assert_eq!(streams[0].name, "s1mple");
    assert_eq!(streams[0].category, Some(StreamCategory::TopPlayer));
    assert_eq!(streams[0].country.code.as_deref(), Some("UA"));
    assert_eq!(streams[0].viewers, Some(12000));
    assert_eq!(streams[0].link, "https://player.twitch.tv/?channel=s1mple");
    assert_eq!(streams[1].viewers, None);

    let threads = extract_threads(&page).unwrap();
    assert_eq!(threads.len(), 3);
    assert_eq!(threads[0].title, "Natus Vincere vs FaZe");
    assert_eq!(threads[0].replies, Some(152));
    assert_eq!(threads[0].category, Some(ThreadCategory::Match));
    assert_eq!(threads[2].category, Some(ThreadCategory::Cs));
}

#[test]
fn test_extract_news() {
    let news = extract_news(&fixture("news.html")).unwrap();

    assert_eq!(news.len(), 2);
    assert_eq!(news[0].link, "/news/38000/navi-win-the-major");
    assert_eq!(news[0].title, "NAVI win the Major");
    assert_eq!(news[0].comments, Some(24));
    assert_eq!(news[0].date, Some(1_710_460_800_000));
    assert_eq!(news[0].country.name, "Ukraine");
    assert_eq!(news[1].comments, None);
    assert_eq!(news[1].date, None);
}

#[test]
fn test_extract_team_placeholder_logo_is_absent() {
    let team = extract_team(4608, &fixture("team.html")).unwrap();

    assert_eq!(team.id, 4608);
    assert_eq!(team.name, "Natus Vincere");
    assert_eq!(team.logo, None);
    assert_eq!(team.rank, Some(1));
    assert_eq!(team.facebook, None);
    assert_eq!(team.twitter.as_deref(), Some("https://twitter.com/natusvincere"));
    assert_eq!(team.country.code.as_deref(), Some("UA"));
    assert_eq!(team.ranking_development, vec![Some(3), Some(2), Some(1)]);
    assert_eq!(team.news.len(), 1);
    assert_eq!(team.news[0].name, "NAVI win the Major");
}

#[test]
fn test_extract_team_roster() {
    let team = extract_team(4608, &fixture("team.html")).unwrap();

    assert_eq!(team.players.len(), 3);
    assert_eq!(team.players[0].id, Some(7998));
    assert_eq!(team.players[0].name, "s1mple");
    assert_eq!(team.players[0].time_on_team.as_deref(), Some("3 years"));
    assert_eq!(team.players[0].maps_played, Some(450));
    assert_eq!(team.players[0].player_type, Some(TeamPlayerType::Starter));
    assert_eq!(team.players[1].player_type, Some(TeamPlayerType::Benched));

    let coach = &team.players[2];
    assert_eq!(coach.id, Some(9000));
    assert_eq!(coach.name, "B1ad3");
    assert_eq!(coach.maps_played, Some(300));
    assert_eq!(coach.player_type, Some(TeamPlayerType::Coach));
}

#[test]
fn test_team_without_name_is_malformed() {
    let page = Page::parse("<html><body><div class=\"teamlogo\"></div></body></html>");
    assert!(matches!(
        extract_team(1, &page),
        Err(HltvError::MalformedResponse(_))
    ));
}
