use axum::{
    extract::{Extension, Path, State},
    Json,
};
use mongodb::bson::doc;
use serde_json::json;

use crate::controllers::{caller_id, parse_id};
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;
use crate::voting::poll::{has_user_voted, user_voted_option};

pub async fn check_vote(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<serde_json::Value>> {
    let user_id = caller_id(&claims)?;
    let obj_id = parse_id(&poll_id, "poll")?;

    let poll = state
        .db
        .collection::<Poll>("polls")
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    let has_voted = has_user_voted(&poll.options, &user_id);

    match user_voted_option(&poll.options, &user_id) {
        Some(option) => Ok(Json(json!({
            "has_voted": has_voted,
            "option_id": option.id
        }))),
        None => Ok(Json(json!({
            "has_voted": has_voted
        }))),
    }
}
