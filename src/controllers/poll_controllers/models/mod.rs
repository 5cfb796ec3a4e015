use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::poll_models::{Poll, PollOption, PollStatus};
use crate::voting::poll::PollStats;

#[derive(Deserialize, Debug)]
pub struct CreatePollRequest {
    pub trip_id: String,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct CastPollVoteRequest {
    pub option_id: String,
}

#[derive(Serialize, Debug)]
pub struct PollResponse {
    pub id: String,
    pub trip_id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub status: PollStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
pub struct PollResultsResponse {
    pub poll_id: String,
    pub question: String,
    pub status: PollStatus,
    #[serde(flatten)]
    pub stats: PollStats,
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        PollResponse {
            id: poll.id.to_hex(),
            trip_id: poll.trip_id.to_hex(),
            question: poll.question,
            options: poll.options,
            status: poll.status,
            created_by: poll.created_by.to_hex(),
            created_at: poll.created_at,
            updated_at: poll.updated_at,
        }
    }
}
