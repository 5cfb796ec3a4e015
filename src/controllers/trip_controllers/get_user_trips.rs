use axum::{
    extract::{Extension, State},
    Json,
};
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::controllers::caller_id;
use crate::controllers::trip_controllers::models::TripResponse;
use crate::models::trip_models::Trip;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::session::Claims;

pub async fn get_user_trips(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<TripResponse>>> {
    let user_id = caller_id(&claims)?;

    let coll = state.db.collection::<Trip>("trips");

    let mut cursor = coll.find(doc! { "members": user_id }).await?;

    let mut trips = Vec::new();
    while let Some(trip) = cursor.try_next().await? {
        trips.push(trip);
    }

    Ok(Json(trips.into_iter().map(TripResponse::from).collect()))
}
