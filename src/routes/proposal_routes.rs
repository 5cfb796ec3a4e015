use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::controllers::proposal_controllers::{
    cast_vote, create_proposal, delete_proposal, get_proposal, get_stats, get_trip_proposals,
};
use crate::middleware::jwt::jwt_auth;
use crate::state::AppState;

pub fn proposal_routes(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_proposal::create_proposal))
        .route("/trip/:tripId", get(get_trip_proposals::get_trip_proposals))
        .route(
            "/:proposalId",
            get(get_proposal::get_proposal).delete(delete_proposal::delete_proposal),
        )
        .route("/:proposalId/vote", post(cast_vote::cast_vote))
        .route("/:proposalId/stats", get(get_stats::get_stats))
        .layer(middleware::from_fn(jwt_auth))
        .with_state(state)
}
