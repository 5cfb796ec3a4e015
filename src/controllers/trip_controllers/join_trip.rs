use axum::{
    extract::{Extension, Path, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::{doc, to_bson};

use crate::controllers::{caller_id, find_trip, parse_id};
use crate::controllers::trip_controllers::models::TripResponse;
use crate::models::trip_models::Trip;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;

pub async fn join_trip(
    Path(trip_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<TripResponse>> {
    let user_id = caller_id(&claims)?;
    let obj_id = parse_id(&trip_id, "trip")?;

    let trip = find_trip(&state.db, obj_id).await?;
    if trip.is_member(&user_id) {
        return Err(AppError::Conflict("You are already a member of this trip".to_string()));
    }

    let coll = state.db.collection::<Trip>("trips");
    coll.update_one(
        doc! { "_id": obj_id },
        doc! {
            "$addToSet": { "members": user_id },
            "$set": { "updated_at": to_bson(&Utc::now())? }
        },
    )
    .await?;

    let updated = find_trip(&state.db, obj_id).await?;
    Ok(Json(updated.into()))
}
