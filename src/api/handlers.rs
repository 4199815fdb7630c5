use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::{
    api::dtos::{
        ErrorResponse, MatchesQuery, MatchesStatsQuery, NewsQuery, PastEventsQuery,
        PlayerRankingQuery, ResultsQuery, TeamRankingQuery,
    },
    app_state::AppState,
    error::HltvError,
};

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error))).into_response()
}

/// Every core failure is a server-side error; upstream refusals are 502.
fn core_error(err: HltvError) -> Response {
    let status = match err {
        HltvError::AccessDenied(_) | HltvError::Transient(_) | HltvError::Fetch(_) => {
            StatusCode::BAD_GATEWAY
        }
        HltvError::NotFound(_)
        | HltvError::MalformedResponse(_)
        | HltvError::TooManyPages { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error!(error = %err, %status, "operation failed");
    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

fn respond<T: Serialize>(result: Result<T, HltvError>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(err) => core_error(err),
    }
}

pub async fn get_events(State(state): State<AppState>) -> Response {
    respond(state.hltv.get_events().await)
}

pub async fn get_past_events(
    State(state): State<AppState>,
    Query(query): Query<PastEventsQuery>,
) -> Response {
    match query.into_options() {
        Ok(opts) => respond(state.hltv.get_past_events(&opts).await),
        Err(error) => bad_request(error),
    }
}

pub async fn get_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchesQuery>,
) -> Response {
    respond(state.hltv.get_matches(&query.into_options()).await)
}

pub async fn get_match_map_stats(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    respond(state.hltv.get_match_map_stats(id).await)
}

pub async fn get_matches_stats(
    State(state): State<AppState>,
    Query(query): Query<MatchesStatsQuery>,
) -> Response {
    match query.into_options() {
        Ok(opts) => respond(state.hltv.get_matches_stats(&opts).await),
        Err(error) => bad_request(error),
    }
}

pub async fn get_results(
    State(state): State<AppState>,
    Query(query): Query<ResultsQuery>,
) -> Response {
    match query.into_options() {
        Ok(opts) => respond(state.hltv.get_results(&opts).await),
        Err(error) => bad_request(error),
    }
}

pub async fn get_team_ranking(
    State(state): State<AppState>,
    Query(query): Query<TeamRankingQuery>,
) -> Response {
    match query.into_options() {
        Ok(opts) => respond(state.hltv.get_team_ranking(&opts).await),
        Err(error) => bad_request(error),
    }
}

pub async fn get_player_ranking(
    State(state): State<AppState>,
    Query(query): Query<PlayerRankingQuery>,
) -> Response {
    match query.into_options() {
        Ok(opts) => respond(state.hltv.get_player_ranking(&opts).await),
        Err(error) => bad_request(error),
    }
}

pub async fn get_streams(State(state): State<AppState>) -> Response {
    respond(state.hltv.get_streams().await)
}

pub async fn get_news(State(state): State<AppState>, Query(query): Query<NewsQuery>) -> Response {
    match query.into_options() {
        Ok(opts) => respond(state.hltv.get_news(&opts).await),
        Err(error) => bad_request(error),
    }
}

pub async fn get_recent_threads(State(state): State<AppState>) -> Response {
    respond(state.hltv.get_recent_threads().await)
}

pub async fn get_team(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    respond(state.hltv.get_team(id).await)
}

pub async fn get_team_by_name(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let name = name.trim();
    if name.is_empty() {
        return bad_request("Team name cannot be empty".to_string());
    }
    respond(state.hltv.get_team_by_name(name).await)
}
