//! Bundled league data.
//!
//! Provides the default data baked into the binary:
//! - Sample roster (the league's signup sheet)
//! - League configuration (team names and practice schedule)
//! - Welcome letter templates (Fluent, per locale)

pub mod embedded;

pub use embedded::{
    get_league_config, get_sample_roster, LeagueConfig, TeamSlot, LEAGUE_CONFIG_YAML,
    LETTER_EN_US_FTL, LETTER_ES_US_FTL, SAMPLE_ROSTER_JSON,
};
