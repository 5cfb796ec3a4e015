use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::models::proposal_models::{ProposalStatus, ProposalVote, VoteType};

/// Seed the vote collection for a new proposal: the creator counts as an
/// immediate approve, every other member starts pending with no timestamp.
pub fn initial_votes(
    created_by: ObjectId,
    members: &[ObjectId],
    now: DateTime<Utc>,
) -> Vec<ProposalVote> {
    let mut votes = vec![ProposalVote {
        user_id: created_by,
        vote: VoteType::Approve,
        voted_at: Some(now),
    }];

    for member in members {
        if *member != created_by {
            votes.push(ProposalVote {
                user_id: *member,
                vote: VoteType::Pending,
                voted_at: None,
            });
        }
    }

    votes
}

/// Record a member's vote: replace their existing entry in place, or
/// append one if they have none yet. Entries are never removed.
pub fn cast_vote(
    votes: &mut Vec<ProposalVote>,
    user_id: ObjectId,
    vote: VoteType,
    now: DateTime<Utc>,
) {
    match votes.iter_mut().find(|v| v.user_id == user_id) {
        Some(existing) => {
            existing.vote = vote;
            existing.voted_at = Some(now);
        }
        None => votes.push(ProposalVote {
            user_id,
            vote,
            voted_at: Some(now),
        }),
    }
}

/// Strict-majority rule gated by full participation: any pending vote
/// keeps the proposal open, and a tie with nobody pending also stays
/// open.
pub fn derive_status(votes: &[ProposalVote]) -> ProposalStatus {
    let stats = vote_stats(votes);

    if stats.pending > 0 {
        ProposalStatus::Voting
    } else if stats.approve > stats.reject {
        ProposalStatus::Approved
    } else if stats.reject > stats.approve {
        ProposalStatus::Rejected
    } else {
        ProposalStatus::Voting
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct VoteStats {
    pub total: usize,
    pub approve: usize,
    pub reject: usize,
    pub pending: usize,
    pub approve_percentage: u32,
    pub reject_percentage: u32,
}

/// Display-only counts and percentages; independent of the status rule.
pub fn vote_stats(votes: &[ProposalVote]) -> VoteStats {
    let mut approve = 0;
    let mut reject = 0;
    let mut pending = 0;

    for entry in votes {
        match entry.vote {
            VoteType::Approve => approve += 1,
            VoteType::Reject => reject += 1,
            VoteType::Pending => pending += 1,
        }
    }

    let total = votes.len();

    VoteStats {
        total,
        approve,
        reject,
        pending,
        approve_percentage: percentage(approve, total),
        reject_percentage: percentage(reject, total),
    }
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid() -> ObjectId {
        ObjectId::new()
    }

    fn entry(user_id: ObjectId, vote: VoteType) -> ProposalVote {
        ProposalVote {
            user_id,
            vote,
            voted_at: match vote {
                VoteType::Pending => None,
                _ => Some(Utc::now()),
            },
        }
    }

    #[test]
    fn initial_votes_creator_approves_rest_pending() {
        let creator = uid();
        let (b, c) = (uid(), uid());
        let votes = initial_votes(creator, &[creator, b, c], Utc::now());

        assert_eq!(votes.len(), 3);
        assert_eq!(votes[0].user_id, creator);
        assert_eq!(votes[0].vote, VoteType::Approve);
        assert!(votes[0].voted_at.is_some());
        for v in &votes[1..] {
            assert_eq!(v.vote, VoteType::Pending);
            assert!(v.voted_at.is_none());
        }
        assert_eq!(derive_status(&votes), ProposalStatus::Voting);
    }

    #[test]
    fn initial_votes_single_member_trip_is_approved() {
        let creator = uid();
        let votes = initial_votes(creator, &[creator], Utc::now());
        assert_eq!(votes.len(), 1);
        assert_eq!(derive_status(&votes), ProposalStatus::Approved);
    }

    #[test]
    fn cast_replaces_existing_entry_without_growing_total() {
        let (a, b) = (uid(), uid());
        let mut votes = vec![entry(a, VoteType::Approve), entry(b, VoteType::Pending)];

        cast_vote(&mut votes, b, VoteType::Reject, Utc::now());

        assert_eq!(votes.len(), 2);
        assert_eq!(votes[1].user_id, b);
        assert_eq!(votes[1].vote, VoteType::Reject);
        assert!(votes[1].voted_at.is_some());
    }

    #[test]
    fn cast_appends_for_new_user() {
        let a = uid();
        let mut votes = vec![entry(a, VoteType::Approve)];

        let newcomer = uid();
        cast_vote(&mut votes, newcomer, VoteType::Approve, Utc::now());

        assert_eq!(votes.len(), 2);
        assert_eq!(votes[1].user_id, newcomer);
    }

    #[test]
    fn counts_partition_the_total() {
        let votes = vec![
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Reject),
            entry(uid(), VoteType::Pending),
        ];
        let stats = vote_stats(&votes);

        assert_eq!(stats.approve + stats.reject + stats.pending, stats.total);
        assert_eq!(stats.total, 4);
        assert_eq!((stats.approve, stats.reject, stats.pending), (2, 1, 1));
    }

    #[test]
    fn any_pending_keeps_status_voting() {
        let votes = vec![
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Pending),
        ];
        assert_eq!(derive_status(&votes), ProposalStatus::Voting);
    }

    #[test]
    fn majority_approve_with_no_pending_approves() {
        let votes = vec![
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Reject),
        ];
        assert_eq!(derive_status(&votes), ProposalStatus::Approved);
    }

    #[test]
    fn majority_reject_with_no_pending_rejects() {
        let votes = vec![
            entry(uid(), VoteType::Reject),
            entry(uid(), VoteType::Reject),
            entry(uid(), VoteType::Approve),
        ];
        assert_eq!(derive_status(&votes), ProposalStatus::Rejected);
    }

    #[test]
    fn tie_with_no_pending_stays_voting() {
        let votes = vec![
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Reject),
        ];
        assert_eq!(derive_status(&votes), ProposalStatus::Voting);
    }

    #[test]
    fn empty_votes_yield_zero_stats_and_voting() {
        let stats = vote_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.approve_percentage, 0);
        assert_eq!(stats.reject_percentage, 0);
        assert_eq!(derive_status(&[]), ProposalStatus::Voting);
    }

    #[test]
    fn percentages_round_half_up() {
        let votes = vec![
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Approve),
            entry(uid(), VoteType::Reject),
        ];
        let stats = vote_stats(&votes);
        // 2/3 = 66.67 -> 67, 1/3 = 33.33 -> 33
        assert_eq!(stats.approve_percentage, 67);
        assert_eq!(stats.reject_percentage, 33);

        let even = vec![entry(uid(), VoteType::Approve), entry(uid(), VoteType::Reject)];
        let stats = vote_stats(&even);
        assert_eq!(stats.approve_percentage, 50);
        assert_eq!(stats.reject_percentage, 50);
    }

    // Three members: creator approves at creation, the others vote in turn.
    #[test]
    fn three_member_scenario_reaches_approved() {
        let (a, b, c) = (uid(), uid(), uid());
        let mut votes = initial_votes(a, &[a, b, c], Utc::now());
        assert_eq!(derive_status(&votes), ProposalStatus::Voting);

        cast_vote(&mut votes, b, VoteType::Approve, Utc::now());
        assert_eq!(derive_status(&votes), ProposalStatus::Voting);

        cast_vote(&mut votes, c, VoteType::Reject, Utc::now());
        assert_eq!(derive_status(&votes), ProposalStatus::Approved);
    }

    #[test]
    fn three_member_unanimous_approval() {
        let (a, b, c) = (uid(), uid(), uid());
        let mut votes = initial_votes(a, &[a, b, c], Utc::now());

        cast_vote(&mut votes, b, VoteType::Approve, Utc::now());
        cast_vote(&mut votes, c, VoteType::Approve, Utc::now());

        let stats = vote_stats(&votes);
        assert_eq!((stats.approve, stats.reject), (3, 0));
        assert_eq!(derive_status(&votes), ProposalStatus::Approved);
    }

    #[test]
    fn two_member_split_stays_open() {
        let (a, b) = (uid(), uid());
        let mut votes = initial_votes(a, &[a, b], Utc::now());

        cast_vote(&mut votes, b, VoteType::Reject, Utc::now());
        assert_eq!(derive_status(&votes), ProposalStatus::Voting);
    }

    // A later vote change can flip a terminal status; status is always a
    // pure function of the current votes.
    #[test]
    fn revote_can_flip_terminal_status() {
        let (a, b, c) = (uid(), uid(), uid());
        let mut votes = initial_votes(a, &[a, b, c], Utc::now());
        cast_vote(&mut votes, b, VoteType::Approve, Utc::now());
        cast_vote(&mut votes, c, VoteType::Approve, Utc::now());
        assert_eq!(derive_status(&votes), ProposalStatus::Approved);

        cast_vote(&mut votes, b, VoteType::Reject, Utc::now());
        cast_vote(&mut votes, c, VoteType::Reject, Utc::now());
        assert_eq!(derive_status(&votes), ProposalStatus::Rejected);
    }
}
