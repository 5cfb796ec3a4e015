use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub trip_id: ObjectId,
    pub question: String,
    /// At least two options, fixed at creation.
    pub options: Vec<PollOption>,
    pub status: PollStatus,
    pub created_by: ObjectId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PollOption {
    pub id: String,
    pub label: String,
    /// Voter set. A user id appears in at most one option's set across
    /// the whole poll; the cast operation enforces this.
    pub votes: Vec<ObjectId>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PollStatus {
    Open,
    Closed,
}
