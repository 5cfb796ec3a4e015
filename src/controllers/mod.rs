use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Database;

use crate::models::trip_models::Trip;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::Claims;

pub mod auth_controllers;
pub mod trip_controllers;
pub mod chat_controllers;
pub mod proposal_controllers;
pub mod poll_controllers;

/// Caller identity from the JWT claims injected by the auth middleware.
pub fn caller_id(claims: &Claims) -> AppResult<ObjectId> {
    ObjectId::parse_str(&claims.sub)
        .map_err(|_| AppError::AuthenticationError("Invalid user id in session".to_string()))
}

pub fn parse_id(raw: &str, what: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid {} id", what)))
}

pub async fn find_trip(db: &Database, trip_id: ObjectId) -> AppResult<Trip> {
    db.collection::<Trip>("trips")
        .find_one(doc! { "_id": trip_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))
}

/// Trip membership gate. Voting and chat are members-only; the voting
/// module itself does not re-check this.
pub fn ensure_member(trip: &Trip, user_id: &ObjectId) -> AppResult<()> {
    if !trip.is_member(user_id) {
        return Err(AppError::PermissionDenied(
            "You are not a member of this trip".to_string(),
        ));
    }
    Ok(())
}
