//! JSON-facing API surface.

pub mod league_json;

pub use league_json::{divide_league_json, DivideRequest, DivideResponse, TeamSummary};
