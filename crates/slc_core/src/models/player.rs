use serde::{Deserialize, Serialize};

/// A league signup record. Players are compared by value; the league office
/// does not assign IDs and duplicate names are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Height in inches.
    pub height_in: u32,
    /// Whether the child has played soccer before.
    pub experienced: bool,
    /// Guardian names in signup order. Never empty: every player has at
    /// least one adult contact for the welcome letter.
    pub guardians: Vec<String>,
}

impl Player {
    pub fn new(name: &str, height_in: u32, experienced: bool, guardians: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            height_in,
            experienced,
            guardians: guardians.iter().map(|g| g.to_string()).collect(),
        }
    }
}
