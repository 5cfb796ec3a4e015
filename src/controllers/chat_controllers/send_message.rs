use axum::{
    extract::{Extension, Path, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::controllers::chat_controllers::models::{MessageResponse, SendMessageRequest};
use crate::controllers::{caller_id, ensure_member, find_trip, parse_id};
use crate::models::message_models::Message;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;

pub async fn send_message(
    Path(trip_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SendMessageRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = caller_id(&claims)?;
    let trip_obj_id = parse_id(&trip_id, "trip")?;

    let text = payload.text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::ValidationError("Message text must not be empty".to_string()));
    }

    let trip = find_trip(&state.db, trip_obj_id).await?;
    ensure_member(&trip, &user_id)?;

    let message = Message {
        id: ObjectId::new(),
        trip_id: trip_obj_id,
        sender_id: user_id,
        text,
        created_at: Utc::now(),
    };

    state
        .db
        .collection::<Message>("messages")
        .insert_one(&message)
        .await?;

    Ok(Json(message.into()))
}
