use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::{find_trip, parse_id};
use crate::controllers::trip_controllers::models::TripResponse;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_trip(
    Path(trip_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<TripResponse>> {
    let obj_id = parse_id(&trip_id, "trip")?;
    let trip = find_trip(&state.db, obj_id).await?;

    Ok(Json(trip.into()))
}
