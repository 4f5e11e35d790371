use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Team count must be at least 1")]
    NoTeams,

    #[error("Roster size {players} is not divisible by team count {teams}")]
    RosterNotDivisible { players: usize, teams: usize },

    #[error("Experienced player count {experienced} is not divisible by team count {teams}")]
    ExperienceNotDivisible { experienced: usize, teams: usize },

    #[error("No team has remaining capacity for {player}")]
    NoEligibleTeam { player: String },
}

impl DraftError {
    /// True for input-level violations caught before any placement runs.
    /// `NoEligibleTeam` is an internal invariant failure instead: it cannot
    /// occur when the preconditions hold.
    pub fn is_precondition(&self) -> bool {
        match self {
            DraftError::NoTeams => true,
            DraftError::RosterNotDivisible { .. } => true,
            DraftError::ExperienceNotDivisible { .. } => true,
            DraftError::NoEligibleTeam { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DraftError>;
