//! Builds one welcome letter per guardian per placed player.

use chrono::NaiveDateTime;
use fluent::FluentValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::data::LeagueConfig;
use crate::letter::{LetterError, LetterLocalizer};
use crate::models::Team;

/// Format for practice times as they appear in letter text, e.g.
/// "Tuesday, March 17 at 1:00 PM".
const PRACTICE_TIME_FORMAT: &str = "%A, %B %-d at %-I:%M %p";

/// A rendered letter, addressed to a single guardian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeLetter {
    pub guardian: String,
    pub player: String,
    pub team: String,
    pub body: String,
}

/// Renders letters for every guardian of every player on `teams`, in team
/// order, then player assignment order, then guardian signup order.
///
/// Every team must have a practice time in `config`; a drafted team missing
/// from the schedule aborts letter generation.
pub fn generate_welcome_letters(
    teams: &[Team],
    config: &LeagueConfig,
    localizer: &LetterLocalizer,
) -> Result<Vec<WelcomeLetter>, LetterError> {
    let mut letters = Vec::new();
    for team in teams {
        let practice_at = config
            .practice_time(&team.name)
            .ok_or_else(|| LetterError::UnscheduledTeam {
                team: team.name.clone(),
            })?;

        for player in &team.players {
            for guardian in &player.guardians {
                letters.push(WelcomeLetter {
                    guardian: guardian.clone(),
                    player: player.name.clone(),
                    team: team.name.clone(),
                    body: letter_body(localizer, guardian, &player.name, team, config, practice_at),
                });
            }
        }
    }

    log::info!("Generated {} welcome letters for {} teams", letters.len(), teams.len());
    Ok(letters)
}

fn letter_body(
    localizer: &LetterLocalizer,
    guardian: &str,
    player: &str,
    team: &Team,
    config: &LeagueConfig,
    practice_at: NaiveDateTime,
) -> String {
    let mut greeting_args = HashMap::new();
    greeting_args.insert("guardian".to_string(), FluentValue::from(guardian.to_string()));
    let greeting = localizer.format("letter-greeting", Some(greeting_args));

    let mut placement_args = HashMap::new();
    placement_args.insert("player".to_string(), FluentValue::from(player.to_string()));
    placement_args.insert("team".to_string(), FluentValue::from(team.name.clone()));
    placement_args.insert("league".to_string(), FluentValue::from(config.league_name.clone()));
    let placement = localizer.format("letter-placement", Some(placement_args));

    let mut practice_args = HashMap::new();
    practice_args.insert(
        "practice".to_string(),
        FluentValue::from(practice_at.format(PRACTICE_TIME_FORMAT).to_string()),
    );
    let practice = localizer.format("letter-practice", Some(practice_args));

    let closing = localizer.format("letter-closing", None);

    format!("{greeting}\n\n{placement} {practice}\n\n{closing}")
}
