//! Embedded league data.
//!
//! `include_str!` bakes the data files into the binary at compile time, so
//! the league tools run with no file I/O and no install-time assets.
//!
//! ## Embedded files
//! - sample_roster.json (the 18-player signup sheet)
//! - league_config.yaml (team names and practice times)
//! - letters/en-US.ftl, letters/es-US.ftl (welcome letter templates)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::models::{Player, Roster};

// ============================================================================
// Embedded sources (included at compile time)
// ============================================================================

/// Signup sheet JSON.
pub const SAMPLE_ROSTER_JSON: &str = include_str!("../../../../data/sample_roster.json");

/// League configuration YAML.
pub const LEAGUE_CONFIG_YAML: &str = include_str!("../../../../data/league_config.yaml");

/// English welcome letter templates.
pub const LETTER_EN_US_FTL: &str = include_str!("../../../../data/letters/en-US.ftl");

/// Spanish welcome letter templates.
pub const LETTER_ES_US_FTL: &str = include_str!("../../../../data/letters/es-US.ftl");

// ============================================================================
// Type definitions
// ============================================================================

/// One team entry in the league configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSlot {
    /// Team name, unique within the league.
    pub name: String,
    /// First practice, local league time.
    pub practice_at: NaiveDateTime,
}

/// Season-level league configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    pub league_name: String,
    /// Team order here is the draft order and the letter output order.
    pub teams: Vec<TeamSlot>,
}

impl LeagueConfig {
    pub fn team_names(&self) -> Vec<&str> {
        self.teams.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn practice_time(&self, team_name: &str) -> Option<NaiveDateTime> {
        self.teams
            .iter()
            .find(|t| t.name == team_name)
            .map(|t| t.practice_at)
    }
}

// ============================================================================
// Cached data (parsed once)
// ============================================================================

static SAMPLE_ROSTER: OnceLock<Roster> = OnceLock::new();
static LEAGUE_CONFIG: OnceLock<LeagueConfig> = OnceLock::new();

// ============================================================================
// Public API
// ============================================================================

/// Returns the bundled signup sheet.
///
/// Parsed on first call, cached afterwards.
pub fn get_sample_roster() -> &'static Roster {
    SAMPLE_ROSTER.get_or_init(|| {
        let players: Vec<Player> = serde_json::from_str(SAMPLE_ROSTER_JSON)
            .expect("Embedded sample roster JSON is corrupted");
        Roster::new(players)
    })
}

/// Returns the bundled league configuration.
///
/// Parsed on first call, cached afterwards.
pub fn get_league_config() -> &'static LeagueConfig {
    LEAGUE_CONFIG.get_or_init(|| {
        serde_yaml::from_str(LEAGUE_CONFIG_YAML).expect("Embedded league config YAML is corrupted")
    })
}

// ============================================================================
// Tests
// ============================================================================
