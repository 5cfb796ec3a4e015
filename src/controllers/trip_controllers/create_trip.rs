use axum::{
    extract::{Extension, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::controllers::caller_id;
use crate::controllers::trip_controllers::models::{CreateTripRequest, TripResponse};
use crate::models::trip_models::Trip;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;

pub async fn create_trip(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateTripRequest>,
) -> AppResult<Json<TripResponse>> {
    let user_id = caller_id(&claims)?;

    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::ValidationError("Trip name must not be empty".to_string()));
    }

    let now = Utc::now();
    let trip = Trip {
        id: ObjectId::new(),
        name,
        destination: payload.destination.trim().to_string(),
        description: payload.description,
        members: vec![user_id],
        created_by: user_id,
        created_at: now,
        updated_at: now,
    };

    state.db.collection::<Trip>("trips").insert_one(&trip).await?;

    Ok(Json(trip.into()))
}
