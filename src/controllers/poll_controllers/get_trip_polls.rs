use axum::{
    extract::{Path, State},
    Json,
};
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::controllers::parse_id;
use crate::controllers::poll_controllers::models::PollResponse;
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_trip_polls(
    Path(trip_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PollResponse>>> {
    let trip_obj_id = parse_id(&trip_id, "trip")?;

    let coll = state.db.collection::<Poll>("polls");

    let mut cursor = coll.find(doc! { "trip_id": trip_obj_id }).await?;

    let mut polls = Vec::new();
    while let Some(poll) = cursor.try_next().await? {
        polls.push(poll);
    }

    Ok(Json(polls.into_iter().map(PollResponse::from).collect()))
}
