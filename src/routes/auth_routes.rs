use axum::{routing::post, Router};

use crate::controllers::auth_controllers::{login, logout};
use crate::state::AppState;

pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login::login))
        .route("/logout", post(logout::logout))
        .with_state(state)
}
