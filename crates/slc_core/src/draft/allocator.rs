use crate::draft::classify::remaining_capacity;
use crate::draft::height::lowest_height_team_among;
use crate::draft::ranking::rank_ascending;
use crate::error::{DraftError, Result};
use crate::models::{Roster, Team};

/// Divides `roster` across one team per entry in `team_names`.
///
/// Players are dealt tallest-first onto the shortest team that still has
/// room for their experience class, which keeps total heights close while
/// holding the experienced/inexperienced split exact. The walk is fully
/// deterministic for a given roster order, so reruns reproduce the same
/// division.
///
/// Fails up front if the roster cannot split evenly; fails mid-draft only if
/// the capacity search exhausts every team, which the divisibility checks
/// rule out for well-formed input.
pub fn assign(roster: &Roster, team_names: &[&str]) -> Result<Vec<Team>> {
    // 1. Refuse rosters that cannot split evenly. Nothing is placed on failure.
    if team_names.is_empty() {
        return Err(DraftError::NoTeams);
    }
    let team_count = team_names.len();
    if roster.len() % team_count != 0 {
        return Err(DraftError::RosterNotDivisible {
            players: roster.len(),
            teams: team_count,
        });
    }
    let experienced = roster.experienced_count();
    if experienced % team_count != 0 {
        return Err(DraftError::ExperienceNotDivisible {
            experienced,
            teams: team_count,
        });
    }

    // 2. Per-team caps, one per experience class.
    let max_per_team = roster.len() / team_count;
    let max_experienced = experienced / team_count;
    let max_inexperienced = max_per_team - max_experienced;
    log::info!(
        "Drafting {} players onto {} teams ({} experienced + {} inexperienced each)",
        roster.len(),
        team_count,
        max_experienced,
        max_inexperienced
    );

    let mut teams: Vec<Team> = team_names.iter().map(|name| Team::new(name)).collect();

    // 3. Rank ascending, then pop from the back so the tallest remaining
    // player is placed while team totals are still small.
    let mut pool = rank_ascending(roster.players.clone(), |p| p.height_in);
    while let Some(player) = pool.pop() {
        let is_experienced = player.experienced;
        let permitted = if is_experienced {
            max_experienced
        } else {
            max_inexperienced
        };

        // 4. Walk candidates shortest-first. A team with no room for this
        // class drops out of the pool and the shortest among the remainder
        // is tried next; the pool resets for every player.
        let mut candidates: Vec<usize> = (0..teams.len()).collect();
        loop {
            let view: Vec<&Team> = candidates.iter().map(|&i| &teams[i]).collect();
            let Some(pos) = lowest_height_team_among(&view) else {
                return Err(DraftError::NoEligibleTeam {
                    player: player.name,
                });
            };
            let team_idx = candidates[pos];
            let room = remaining_capacity(&teams[team_idx], permitted, |p| {
                p.experienced == is_experienced
            });
            if room > 0 {
                log::debug!(
                    "Placed {} ({} in) on {}",
                    player.name,
                    player.height_in,
                    teams[team_idx].name
                );
                teams[team_idx].push(player);
                break;
            }
            log::debug!(
                "{} is full for this class, retrying {} elsewhere",
                teams[team_idx].name,
                player.name
            );
            candidates.remove(pos);
        }
    }

    log::info!(
        "Draft complete: team heights {:?}",
        teams.iter().map(Team::total_height).collect::<Vec<_>>()
    );
    Ok(teams)
}
