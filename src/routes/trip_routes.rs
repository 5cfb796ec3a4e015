use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::controllers::chat_controllers::{get_messages, send_message};
use crate::controllers::trip_controllers::{create_trip, get_trip, get_user_trips, join_trip};
use crate::middleware::jwt::jwt_auth;
use crate::state::AppState;

pub fn trip_routes(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_trip::create_trip))
        .route("/user/me", get(get_user_trips::get_user_trips))
        .route("/:tripId", get(get_trip::get_trip))
        .route("/:tripId/join", post(join_trip::join_trip))
        .route(
            "/:tripId/messages",
            get(get_messages::get_messages).post(send_message::send_message),
        )
        .layer(middleware::from_fn(jwt_auth))
        .with_state(state)
}
