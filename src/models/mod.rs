pub mod user_models;
pub mod trip_models;
pub mod message_models;
pub mod proposal_models;
pub mod poll_models;
