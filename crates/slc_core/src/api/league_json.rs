use serde::{Deserialize, Serialize};

use crate::data::get_league_config;
use crate::draft::assign;
use crate::letter::{generate_welcome_letters, LetterLocalizer, WelcomeLetter};
use crate::models::{Player, Roster, Team};

#[derive(Debug, Deserialize)]
pub struct DivideRequest {
    pub schema_version: u8,
    pub roster: Vec<Player>,
    /// Overrides the configured team names. Letters need every listed team
    /// to have a practice time in the league configuration.
    #[serde(default)]
    pub team_names: Option<Vec<String>>,
    #[serde(default)]
    pub include_letters: bool,
    /// Preferred letter languages, best match wins. Empty means the league
    /// default.
    #[serde(default)]
    pub locales: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DivideResponse {
    pub schema_version: u8,
    pub league_name: String,
    pub teams: Vec<TeamSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letters: Option<Vec<WelcomeLetter>>,
}

#[derive(Debug, Serialize)]
pub struct TeamSummary {
    pub name: String,
    pub players: Vec<Player>,
    pub player_count: usize,
    pub experienced_count: usize,
    pub inexperienced_count: usize,
    pub total_height_in: u32,
    pub average_height_in: f64,
}

impl From<Team> for TeamSummary {
    fn from(team: Team) -> Self {
        Self {
            player_count: team.player_count(),
            experienced_count: team.experienced_count(),
            inexperienced_count: team.inexperienced_count(),
            total_height_in: team.total_height(),
            average_height_in: team.average_height(),
            name: team.name,
            players: team.players,
        }
    }
}

/// Main entry point for the JSON API - divides a roster from a JSON request
pub fn divide_league_json(request_json: &str) -> Result<String, String> {
    // Parse request
    let request: DivideRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    // Validate schema version
    if request.schema_version != crate::SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let config = get_league_config();
    let names: Vec<String> = match request.team_names {
        Some(names) => names,
        None => config.team_names().iter().map(|n| n.to_string()).collect(),
    };
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    // Run the draft
    let roster = Roster::new(request.roster);
    let teams = assign(&roster, &name_refs).map_err(|e| format!("Draft failed: {}", e))?;

    // Render letters if asked for
    let letters = if request.include_letters {
        let mut localizer = LetterLocalizer::new();
        if !request.locales.is_empty() {
            let requested: Vec<&str> = request.locales.iter().map(String::as_str).collect();
            let locale = localizer.negotiate_locale(&requested);
            localizer
                .set_locale(&locale)
                .map_err(|e| format!("Letter generation failed: {}", e))?;
        }
        let rendered = generate_welcome_letters(&teams, config, &localizer)
            .map_err(|e| format!("Letter generation failed: {}", e))?;
        Some(rendered)
    } else {
        None
    };

    let response = DivideResponse {
        schema_version: crate::SCHEMA_VERSION,
        league_name: config.league_name.clone(),
        teams: teams.into_iter().map(TeamSummary::from).collect(),
        letters,
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize result: {}", e))
}
