use axum::{
    extract::{Extension, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use uuid::Uuid;

use crate::controllers::poll_controllers::models::{CreatePollRequest, PollResponse};
use crate::controllers::{caller_id, ensure_member, find_trip, parse_id};
use crate::models::poll_models::{Poll, PollOption, PollStatus};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;

pub async fn create_poll(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreatePollRequest>,
) -> AppResult<Json<PollResponse>> {
    let user_id = caller_id(&claims)?;
    let trip_obj_id = parse_id(&payload.trip_id, "trip")?;

    let question = payload.question.trim().to_string();
    if question.is_empty() {
        return Err(AppError::ValidationError("Poll question must not be empty".to_string()));
    }

    let labels: Vec<String> = payload
        .options
        .iter()
        .map(|opt| opt.trim().to_string())
        .filter(|opt| !opt.is_empty())
        .collect();

    if labels.len() < 2 {
        return Err(AppError::ValidationError(
            "Poll must have at least 2 non-empty options".to_string(),
        ));
    }

    let mut deduped = Vec::new();
    for label in &labels {
        if !deduped.contains(label) {
            deduped.push(label.clone());
        }
    }
    if deduped.len() != labels.len() {
        return Err(AppError::ValidationError("Poll options must be unique".to_string()));
    }

    let trip = find_trip(&state.db, trip_obj_id).await?;
    ensure_member(&trip, &user_id)?;

    let now = Utc::now();
    let poll = Poll {
        id: ObjectId::new(),
        trip_id: trip_obj_id,
        question,
        options: labels
            .into_iter()
            .map(|label| PollOption {
                id: Uuid::new_v4().to_string(),
                label,
                votes: Vec::new(),
            })
            .collect(),
        status: PollStatus::Open,
        created_by: user_id,
        created_at: now,
        updated_at: now,
    };

    state.db.collection::<Poll>("polls").insert_one(&poll).await?;

    Ok(Json(poll.into()))
}
