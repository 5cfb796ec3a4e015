use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Trip {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub destination: String,
    pub description: String,
    /// Group members. The creator is always a member.
    pub members: Vec<ObjectId>,
    pub created_by: ObjectId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn is_member(&self, user_id: &ObjectId) -> bool {
        self.members.contains(user_id)
    }
}
