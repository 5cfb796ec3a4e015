pub mod create_proposal;
pub mod cast_vote;
pub mod get_proposal;
pub mod get_trip_proposals;
pub mod get_stats;
pub mod delete_proposal;
pub mod models;
