use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::doc;

use crate::controllers::parse_id;
use crate::controllers::poll_controllers::models::PollResponse;
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn get_poll(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<PollResponse>> {
    let obj_id = parse_id(&poll_id, "poll")?;

    let poll = state
        .db
        .collection::<Poll>("polls")
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    Ok(Json(poll.into()))
}
