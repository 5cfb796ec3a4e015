pub mod create_poll;
pub mod cast_vote;
pub mod close_poll;
pub mod get_poll;
pub mod get_trip_polls;
pub mod get_results;
pub mod check_vote;
pub mod models;
