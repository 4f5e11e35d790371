use serde::{Deserialize, Serialize};

use super::Player;

/// One team slot in the division. Players are appended in assignment order
/// and that order is preserved through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            players: Vec::new(),
        }
    }

    pub fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn experienced_count(&self) -> usize {
        self.players.iter().filter(|p| p.experienced).count()
    }

    pub fn inexperienced_count(&self) -> usize {
        self.players.iter().filter(|p| !p.experienced).count()
    }

    /// Sum of player heights in inches. Recomputed on demand so it can never
    /// drift from the roster contents.
    pub fn total_height(&self) -> u32 {
        self.players.iter().map(|p| p.height_in).sum()
    }

    /// Mean height in inches, or 0.0 for an empty team.
    pub fn average_height(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        f64::from(self.total_height()) / self.players.len() as f64
    }
}
