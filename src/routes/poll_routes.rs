use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::controllers::poll_controllers::{
    cast_vote, check_vote, close_poll, create_poll, get_poll, get_results, get_trip_polls,
};
use crate::middleware::jwt::jwt_auth;
use crate::state::AppState;

pub fn poll_routes(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_poll::create_poll))
        .route("/trip/:tripId", get(get_trip_polls::get_trip_polls))
        .route("/:pollId", get(get_poll::get_poll))
        .route("/:pollId/vote", post(cast_vote::cast_vote))
        .route("/:pollId/vote/check", get(check_vote::check_vote))
        .route("/:pollId/close", post(close_poll::close_poll))
        .route("/:pollId/results", get(get_results::get_results))
        .route("/:pollId/results/stream", get(get_results::results_stream))
        .layer(middleware::from_fn(jwt_auth))
        .with_state(state)
}
