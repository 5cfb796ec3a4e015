use axum::{
    extract::{Extension, Path, State},
    Json,
};
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::controllers::chat_controllers::models::MessageResponse;
use crate::controllers::{caller_id, ensure_member, find_trip, parse_id};
use crate::models::message_models::Message;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::session::Claims;

pub async fn get_messages(
    Path(trip_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<MessageResponse>>> {
    let user_id = caller_id(&claims)?;
    let trip_obj_id = parse_id(&trip_id, "trip")?;

    let trip = find_trip(&state.db, trip_obj_id).await?;
    ensure_member(&trip, &user_id)?;

    let coll = state.db.collection::<Message>("messages");

    let mut cursor = coll.find(doc! { "trip_id": trip_obj_id }).await?;

    let mut messages = Vec::new();
    while let Some(message) = cursor.try_next().await? {
        messages.push(message);
    }

    messages.sort_by_key(|m| m.created_at);

    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}
