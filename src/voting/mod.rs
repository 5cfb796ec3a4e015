//! Pure vote aggregation for proposals and polls.
//!
//! Everything in here is synchronous and I/O-free: functions take the
//! current vote collection, return the derived status or statistics, and
//! leave persistence, optimistic updates and rollback to the controllers.

pub mod proposal;
pub mod poll;
