use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::models::poll_models::{PollOption, PollStatus};
use crate::utils::error::{AppError, AppResult};

/// Record a single-choice vote: the user is removed from every option's
/// voter set, then added to the chosen one. Rejected without mutating
/// anything when the poll is closed or the option id is unknown.
pub fn cast_vote(
    status: PollStatus,
    options: &mut [PollOption],
    user_id: ObjectId,
    option_id: &str,
) -> AppResult<()> {
    if status == PollStatus::Closed {
        return Err(AppError::ValidationError(
            "Poll is closed. Voting is not allowed".to_string(),
        ));
    }

    if !options.iter().any(|option| option.id == option_id) {
        return Err(AppError::BadRequest(
            "Invalid option ID for this poll".to_string(),
        ));
    }

    for option in options.iter_mut() {
        option.votes.retain(|voter| *voter != user_id);
        if option.id == option_id {
            option.votes.push(user_id);
        }
    }

    Ok(())
}

/// Close a poll on behalf of `caller`. Only the creator may close, and
/// the transition is one-way: an already-closed poll is never reopened
/// and closing it again is a conflict.
pub fn close(
    status: PollStatus,
    created_by: ObjectId,
    caller: ObjectId,
) -> AppResult<PollStatus> {
    if caller != created_by {
        return Err(AppError::PermissionDenied(
            "Only the creator of the poll can close it".to_string(),
        ));
    }

    if status == PollStatus::Closed {
        return Err(AppError::Conflict("Poll is already closed".to_string()));
    }

    Ok(PollStatus::Closed)
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct OptionStats {
    pub id: String,
    pub label: String,
    pub vote_count: usize,
    pub percentage: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PollStats {
    pub total_votes: usize,
    /// Options ordered by descending vote count; ties keep the poll's
    /// original option order (stable sort). Display ordering only, the
    /// poll document itself is untouched.
    pub options: Vec<OptionStats>,
    pub winning_option: Option<OptionStats>,
}

pub fn poll_stats(options: &[PollOption]) -> PollStats {
    let total_votes: usize = options.iter().map(|option| option.votes.len()).sum();

    let mut ranked: Vec<OptionStats> = options
        .iter()
        .map(|option| OptionStats {
            id: option.id.clone(),
            label: option.label.clone(),
            vote_count: option.votes.len(),
            percentage: percentage(option.votes.len(), total_votes),
        })
        .collect();

    ranked.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));

    let winning_option = ranked.first().cloned();

    PollStats {
        total_votes,
        options: ranked,
        winning_option,
    }
}

pub fn has_user_voted(options: &[PollOption], user_id: &ObjectId) -> bool {
    options.iter().any(|option| option.votes.contains(user_id))
}

pub fn user_voted_option<'a>(
    options: &'a [PollOption],
    user_id: &ObjectId,
) -> Option<&'a PollOption> {
    options.iter().find(|option| option.votes.contains(user_id))
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

    fn option(id: &str, label: &str, votes: Vec<ObjectId>) -> PollOption {
        PollOption {
            id: id.to_string(),
            label: label.to_string(),
            votes,
        }
    }

    fn day_options() -> Vec<PollOption> {
        vec![
            option("tue", "Tuesday", vec![uid(), uid(), uid()]),
            option("wed", "Wednesday", vec![uid()]),
        ]
    }

    #[test]
    fn cast_puts_user_in_exactly_one_option() {
        let voter = uid();
        let mut options = vec![
            option("a", "A", vec![]),
            option("b", "B", vec![]),
        ];

        cast_vote(PollStatus::Open, &mut options, voter, "a").unwrap();

        assert!(has_user_voted(&options, &voter));
        assert_eq!(user_voted_option(&options, &voter).unwrap().id, "a");
        let appearances: usize = options
            .iter()
            .filter(|o| o.votes.contains(&voter))
            .count();
        assert_eq!(appearances, 1);
    }

    #[test]
    fn recast_moves_the_vote() {
        let voter = uid();
        let mut options = vec![
            option("tue", "Tuesday", vec![voter]),
            option("wed", "Wednesday", vec![]),
        ];

        cast_vote(PollStatus::Open, &mut options, voter, "wed").unwrap();

        assert!(!options[0].votes.contains(&voter));
        assert!(options[1].votes.contains(&voter));
        assert_eq!(user_voted_option(&options, &voter).unwrap().id, "wed");
    }

    #[test]
    fn recast_same_option_is_idempotent() {
        let voter = uid();
        let mut options = vec![
            option("tue", "Tuesday", vec![voter]),
            option("wed", "Wednesday", vec![]),
        ];

        cast_vote(PollStatus::Open, &mut options, voter, "tue").unwrap();

        assert_eq!(options[0].votes.len(), 1);
        assert_eq!(poll_stats(&options).total_votes, 1);
    }

    #[test]
    fn closed_poll_rejects_votes_without_mutation() {
        let voter = uid();
        let mut options = day_options();
        let before: Vec<usize> = options.iter().map(|o| o.votes.len()).collect();

        let err = cast_vote(PollStatus::Closed, &mut options, voter, "tue").unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        let after: Vec<usize> = options.iter().map(|o| o.votes.len()).collect();
        assert_eq!(before, after);
        assert!(!has_user_voted(&options, &voter));
    }

    #[test]
    fn unknown_option_rejects_without_mutation() {
        let voter = uid();
        let mut options = day_options();
        let before: Vec<usize> = options.iter().map(|o| o.votes.len()).collect();

        let err = cast_vote(PollStatus::Open, &mut options, voter, "thu").unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(before, options.iter().map(|o| o.votes.len()).collect::<Vec<_>>());
    }

    #[test]
    fn stats_percentages_and_winner() {
        let stats = poll_stats(&day_options());

        assert_eq!(stats.total_votes, 4);
        assert_eq!(stats.options[0].id, "tue");
        assert_eq!(stats.options[0].percentage, 75);
        assert_eq!(stats.options[1].percentage, 25);
        assert_eq!(stats.winning_option.unwrap().id, "tue");
    }

    #[test]
    fn empty_poll_has_zero_percentages_and_first_option_wins() {
        let options = vec![
            option("tue", "Tuesday", vec![]),
            option("wed", "Wednesday", vec![]),
        ];
        let stats = poll_stats(&options);

        assert_eq!(stats.total_votes, 0);
        assert!(stats.options.iter().all(|o| o.percentage == 0));
        let winner = stats.winning_option.unwrap();
        assert_eq!(winner.id, "tue");
        assert_eq!(winner.vote_count, 0);
    }

    #[test]
    fn tied_options_keep_original_order() {
        let options = vec![
            option("a", "A", vec![uid()]),
            option("b", "B", vec![uid()]),
            option("c", "C", vec![]),
        ];
        let stats = poll_stats(&options);

        assert_eq!(stats.options[0].id, "a");
        assert_eq!(stats.options[1].id, "b");
        assert_eq!(stats.winning_option.unwrap().id, "a");
    }

    #[test]
    fn percentages_sum_to_roughly_100() {
        let options = vec![
            option("a", "A", vec![uid()]),
            option("b", "B", vec![uid()]),
            option("c", "C", vec![uid()]),
        ];
        let stats = poll_stats(&options);

        // 33 + 33 + 33: independent rounding may drift by one per option.
        let sum: u32 = stats.options.iter().map(|o| o.percentage).sum();
        assert!(sum >= 97 && sum <= 103);
    }

    #[test]
    fn creator_can_close_an_open_poll() {
        let creator = uid();

        let status = close(PollStatus::Open, creator, creator).unwrap();
        assert_eq!(status, PollStatus::Closed);
    }

    #[test]
    fn non_creator_cannot_close_and_poll_stays_open() {
        let creator = uid();
        let other = uid();
        let status = PollStatus::Open;

        let err = close(status, creator, other).unwrap_err();

        assert!(matches!(err, AppError::PermissionDenied(_)));
        assert_eq!(status, PollStatus::Open);
    }

    #[test]
    fn closing_is_one_way() {
        let creator = uid();

        let err = close(PollStatus::Closed, creator, creator).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn membership_queries_on_nonvoter() {
        let options = day_options();
        let outsider = uid();

        assert!(!has_user_voted(&options, &outsider));
        assert!(user_voted_option(&options, &outsider).is_none());
    }
}
