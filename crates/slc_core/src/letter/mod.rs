//! Guardian welcome letters.
//!
//! After the draft, every guardian of every placed player gets a letter
//! naming the player's team and its first practice. Letter text lives in
//! Fluent (FTL) templates so leagues can serve more than one language.

pub mod generator;
pub mod localization;

use thiserror::Error;

pub use generator::{generate_welcome_letters, WelcomeLetter};
pub use localization::{LetterLocalizer, SUPPORTED_LOCALES};

#[derive(Error, Debug)]
pub enum LetterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse letter template: {0}")]
    InvalidTemplate(String),

    #[error("Locale {locale} is not loaded")]
    UnknownLocale { locale: String },

    #[error("No practice time scheduled for team {team}")]
    UnscheduledTeam { team: String },
}
