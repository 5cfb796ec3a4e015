use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::message_models::Message;

#[derive(Deserialize, Debug)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub id: String,
    pub trip_id: String,
    pub sender_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        MessageResponse {
            id: message.id.to_hex(),
            trip_id: message.trip_id.to_hex(),
            sender_id: message.sender_id.to_hex(),
            text: message.text,
            created_at: message.created_at,
        }
    }
}
