use axum::{
    extract::{Extension, Path, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::{doc, to_bson};

use crate::controllers::poll_controllers::models::{CastPollVoteRequest, PollResponse};
use crate::controllers::{caller_id, ensure_member, find_trip, parse_id};
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;
use crate::voting::poll::cast_vote as apply_vote;

pub async fn cast_vote(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CastPollVoteRequest>,
) -> AppResult<Json<PollResponse>> {
    let user_id = caller_id(&claims)?;
    let obj_id = parse_id(&poll_id, "poll")?;

    let coll = state.db.collection::<Poll>("polls");

    let mut poll = coll
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    let trip = find_trip(&state.db, poll.trip_id).await?;
    ensure_member(&trip, &user_id)?;

    // Single-choice exclusivity and the closed check live in the pure
    // cast; nothing is written unless it succeeds.
    apply_vote(poll.status, &mut poll.options, user_id, &payload.option_id)?;
    poll.updated_at = Utc::now();

    coll.update_one(
        doc! { "_id": obj_id },
        doc! {
            "$set": {
                "options": to_bson(&poll.options)?,
                "updated_at": to_bson(&poll.updated_at)?,
            }
        },
    )
    .await?;

    Ok(Json(poll.into()))
}
