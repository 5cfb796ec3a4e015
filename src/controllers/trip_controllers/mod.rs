pub mod create_trip;
pub mod get_trip;
pub mod join_trip;
pub mod get_user_trips;
pub mod models;
