use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::proposal_models::{
    Proposal, ProposalCategory, ProposalStatus, ProposalVote, VoteType,
};

#[derive(Deserialize, Debug)]
pub struct CreateProposalRequest {
    pub trip_id: String,
    pub category: ProposalCategory,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct CastProposalVoteRequest {
    pub vote: VoteType,
}

#[derive(Serialize, Debug)]
pub struct ProposalVoteResponse {
    pub user_id: String,
    pub vote: VoteType,
    pub voted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug)]
pub struct ProposalResponse {
    pub id: String,
    pub trip_id: String,
    pub category: ProposalCategory,
    pub title: String,
    pub description: String,
    pub status: ProposalStatus,
    pub votes: Vec<ProposalVoteResponse>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProposalVote> for ProposalVoteResponse {
    fn from(vote: ProposalVote) -> Self {
        ProposalVoteResponse {
            user_id: vote.user_id.to_hex(),
            vote: vote.vote,
            voted_at: vote.voted_at,
        }
    }
}

impl From<Proposal> for ProposalResponse {
    fn from(proposal: Proposal) -> Self {
        ProposalResponse {
            id: proposal.id.to_hex(),
            trip_id: proposal.trip_id.to_hex(),
            category: proposal.category,
            title: proposal.title,
            description: proposal.description,
            status: proposal.status,
            votes: proposal.votes.into_iter().map(ProposalVoteResponse::from).collect(),
            created_by: proposal.created_by.to_hex(),
            created_at: proposal.created_at,
            updated_at: proposal.updated_at,
        }
    }
}
