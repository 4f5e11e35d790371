use super::Player;

/// The complete signup list for a season. Built once from static input and
/// never mutated; the draft works on its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn experienced_count(&self) -> usize {
        self.players.iter().filter(|p| p.experienced).count()
    }

    pub fn inexperienced_count(&self) -> usize {
        self.players.iter().filter(|p| !p.experienced).count()
    }
}

impl From<Vec<Player>> for Roster {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}
