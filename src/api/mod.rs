//! JSON over HTTP for every [`Hltv`](crate::Hltv) operation.

pub mod dtos;
pub mod handlers;

use axum::{Router, routing::get};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{app_state::AppState, health::health_check};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/events", get(handlers::get_events))
        .route("/events/archive", get(handlers::get_past_events))
        .route("/matches", get(handlers::get_matches))
        .route("/results", get(handlers::get_results))
        .route("/stats/matches", get(handlers::get_matches_stats))
        .route("/stats/maps/{id}", get(handlers::get_match_map_stats))
        .route("/teams/{id}", get(handlers::get_team))
        .route("/teams/name/{name}", get(handlers::get_team_by_name))
        .route("/ranking/teams", get(handlers::get_team_ranking))
        .route("/ranking/players", get(handlers::get_player_ranking))
        .route("/news", get(handlers::get_news))
        .route("/streams", get(handlers::get_streams))
        .route("/threads", get(handlers::get_recent_threads))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
