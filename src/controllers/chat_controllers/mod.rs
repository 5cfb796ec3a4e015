pub mod send_message;
pub mod get_messages;
pub mod models;
