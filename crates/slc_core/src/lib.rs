//! # slc_core - Deterministic Youth League Team Allocation Engine
//!
//! This library divides a soccer league's signup roster into evenly matched
//! teams and renders welcome letters for player guardians, with a JSON API
//! for easy integration with registration front ends.
//!
//! ## Features
//! - 100% deterministic drafting (same roster = same teams)
//! - Height-balanced teams with an exact experienced/inexperienced split
//! - Localized guardian welcome letters (Fluent templates)
//! - JSON API for easy integration

pub mod api;
pub mod data;
pub mod draft;
pub mod error;
pub mod letter;
pub mod models;
pub mod report;

// Re-export main API functions
pub use api::{divide_league_json, DivideRequest, DivideResponse, TeamSummary};
pub use error::{DraftError, Result};

// Re-export the draft pipeline
pub use draft::{assign, lowest_height_team_among, partition_by_experience, rank_ascending};

// Re-export core models
pub use models::{Player, Roster, Team};

// Re-export embedded league data
pub use data::{get_league_config, get_sample_roster, LeagueConfig, TeamSlot};

// Re-export letter generation
pub use letter::{
    generate_welcome_letters, LetterError, LetterLocalizer, WelcomeLetter, SUPPORTED_LOCALES,
};

// Re-export report formatting
pub use report::{format_division_summary, format_roster_table};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
