use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::trip_models::Trip;

#[derive(Deserialize, Debug)]
pub struct CreateTripRequest {
    pub name: String,
    pub destination: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Debug)]
pub struct TripResponse {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub description: String,
    pub members: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        TripResponse {
            id: trip.id.to_hex(),
            name: trip.name,
            destination: trip.destination,
            description: trip.description,
            members: trip.members.iter().map(|m| m.to_hex()).collect(),
            created_by: trip.created_by.to_hex(),
            created_at: trip.created_at,
            updated_at: trip.updated_at,
        }
    }
}
