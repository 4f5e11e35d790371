use crate::models::{Player, Team};

/// Sum of heights in inches. 0 for an empty list.
pub fn total_height(players: &[Player]) -> u32 {
    players.iter().map(|p| p.height_in).sum()
}

/// Index within `candidates` of the team with the smallest total height.
/// Ties go to the first occurrence, so with equal heights the lowest index
/// wins. Returns `None` only for an empty candidate list.
///
/// The slice is a candidate view, not necessarily the full team list; the
/// caller maps the returned position back to its own indexing.
pub fn lowest_height_team_among(candidates: &[&Team]) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    let mut lowest = 0;
    for i in 1..candidates.len() {
        if total_height(&candidates[i].players) < total_height(&candidates[lowest].players) {
            lowest = i;
        }
    }
    Some(lowest)
}
