use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;
use chrono::{DateTime, Utc};

/// A single member's position on a proposal. Every trip member has
/// exactly one entry in a proposal's vote collection; entries are
/// replaced in place when a member re-votes, never removed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProposalVote {
    pub user_id: ObjectId,
    pub vote: VoteType,
    /// Empty until the member has actually voted (pending entries are
    /// seeded at proposal creation without a timestamp).
    pub voted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Approve,
    Reject,
    Pending,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Voting,
    Approved,
    Rejected,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProposalCategory {
    Dining,
    Activities,
    Lodging,
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Proposal {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub trip_id: ObjectId,
    pub category: ProposalCategory,
    pub title: String,
    pub description: String,
    /// Always equal to `voting::proposal::derive_status(&votes)`;
    /// recomputed and written back after every cast.
    pub status: ProposalStatus,
    pub votes: Vec<ProposalVote>,
    pub created_by: ObjectId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
