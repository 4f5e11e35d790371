//! Team drafting pipeline.
//!
//! The draft runs in three phases: derive per-class team caps, rank the
//! signup list by height, then deal players tallest-first onto the shortest
//! team with room for their class. Every phase is deterministic, so the same
//! roster and team list always produce the same division.

pub mod allocator;
pub mod classify;
pub mod height;
pub mod ranking;

pub use allocator::assign;
pub use classify::partition_by_experience;
pub use height::lowest_height_team_among;
pub use ranking::rank_ascending;
