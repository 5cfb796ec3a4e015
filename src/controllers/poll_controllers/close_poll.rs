use axum::{
    extract::{Extension, Path, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::{doc, to_bson};

use crate::controllers::poll_controllers::models::PollResponse;
use crate::controllers::{caller_id, parse_id};
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;
use crate::voting::poll::close as apply_close;

/// One-way open -> closed transition, creator only.
pub async fn close_poll(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<PollResponse>> {
    let user_id = caller_id(&claims)?;
    let obj_id = parse_id(&poll_id, "poll")?;

    let coll = state.db.collection::<Poll>("polls");

    let poll = coll
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    let new_status = apply_close(poll.status, poll.created_by, user_id)?;

    coll.update_one(
        doc! { "_id": obj_id },
        doc! {
            "$set": {
                "status": to_bson(&new_status)?,
                "updated_at": to_bson(&Utc::now())?,
            }
        },
    )
    .await?;

    let updated = coll
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    Ok(Json(updated.into()))
}
