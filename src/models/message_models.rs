use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub trip_id: ObjectId,
    pub sender_id: ObjectId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
