pub mod auth_routes;
pub mod trip_routes;
pub mod proposal_routes;
pub mod poll_routes;
