use crate::models::{Player, Team};

/// Splits a pool into (experienced, inexperienced), each keeping input order.
/// Every player lands in exactly one half.
pub fn partition_by_experience(players: Vec<Player>) -> (Vec<Player>, Vec<Player>) {
    players.into_iter().partition(|p| p.experienced)
}

/// How many more players matching `class_predicate` the team may take before
/// hitting `permitted`. Goes negative if the team is already over the cap, so
/// callers treat anything non-positive as "no room."
pub fn remaining_capacity<F>(team: &Team, permitted: usize, class_predicate: F) -> i64
where
    F: Fn(&Player) -> bool,
{
    let occupied = team.players.iter().filter(|p| class_predicate(p)).count();
    permitted as i64 - occupied as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_covers_every_player_once() {
        let players = vec![
            Player::new("A", 42, true, &["GA"]),
            Player::new("B", 36, false, &["GB"]),
            Player::new("C", 43, true, &["GC"]),
            Player::new("D", 40, false, &["GD"]),
        ];
        let total = players.len();

        let (experienced, inexperienced) = partition_by_experience(players);
        assert_eq!(experienced.len() + inexperienced.len(), total);
        assert!(experienced.iter().all(|p| p.experienced));
        assert!(inexperienced.iter().all(|p| !p.experienced));
    }

    #[test]
    fn test_partition_preserves_order_within_class() {
        let players = vec![
            Player::new("A", 42, true, &["GA"]),
            Player::new("B", 36, false, &["GB"]),
            Player::new("C", 43, true, &["GC"]),
            Player::new("D", 40, false, &["GD"]),
        ];

        let (experienced, inexperienced) = partition_by_experience(players);
        let exp_names: Vec<&str> = experienced.iter().map(|p| p.name.as_str()).collect();
        let nov_names: Vec<&str> = inexperienced.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(exp_names, vec!["A", "C"]);
        assert_eq!(nov_names, vec!["B", "D"]);
    }

    #[test]
    fn test_remaining_capacity_counts_down() {
        let mut team = Team::new("Dragons");
        assert_eq!(remaining_capacity(&team, 2, |p| p.experienced), 2);

        team.push(Player::new("A", 42, true, &["GA"]));
        assert_eq!(remaining_capacity(&team, 2, |p| p.experienced), 1);

        team.push(Player::new("B", 36, false, &["GB"]));
        assert_eq!(remaining_capacity(&team, 2, |p| p.experienced), 1);
        assert_eq!(remaining_capacity(&team, 2, |p| !p.experienced), 1);

        team.push(Player::new("C", 43, true, &["GC"]));
        assert_eq!(remaining_capacity(&team, 2, |p| p.experienced), 0);
    }

    #[test]
    fn test_remaining_capacity_can_go_negative() {
        let mut team = Team::new("Sharks");
        team.push(Player::new("A", 42, true, &["GA"]));
        team.push(Player::new("B", 43, true, &["GB"]));
        assert_eq!(remaining_capacity(&team, 1, |p| p.experienced), -1);
    }
}
