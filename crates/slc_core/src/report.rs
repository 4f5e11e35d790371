//! Plain-text report formatting.
//!
//! Pure string builders; printing is the caller's job.

use crate::models::{Player, Team};

/// Renders the signup sheet as a tab-separated table for eyeballing against
/// the league's spreadsheet.
pub fn format_roster_table(players: &[Player]) -> String {
    let mut lines = vec![
        "Name | Height | Experience | Guardian(s)".to_string(),
        "-".repeat(40),
    ];
    for player in players {
        lines.push(format!(
            "{}\t\t{}\t{}\t{}",
            player.name,
            player.height_in,
            if player.experienced { "YES" } else { "NO" },
            player.guardians.join(", ")
        ));
    }
    lines.join("\n")
}

/// One block per team in draft order: the team header, a height-annotated
/// roster, then the size, class split, and height stats.
pub fn format_division_summary(teams: &[Team]) -> String {
    let mut blocks = Vec::with_capacity(teams.len());
    for team in teams {
        let mut lines = vec![format!("{}:", team.name)];
        for player in &team.players {
            lines.push(format!("  {} in  {}", player.height_in, player.name));
        }
        lines.push(format!(
            "  {} players ({} experienced, {} inexperienced), total height {} in, average {:.1} in",
            team.player_count(),
            team.experienced_count(),
            team.inexperienced_count(),
            team.total_height(),
            team.average_height()
        ));
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{get_league_config, get_sample_roster};
    use crate::draft::assign;

    #[test]
    fn test_roster_table_layout() {
        let roster = get_sample_roster();
        let table = format_roster_table(&roster.players);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Name | Height | Experience | Guardian(s)");
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[2], "Joe Smith\t\t42\tYES\tJim Smith, Jan Smith");
        assert_eq!(lines[3], "Jill Tanner\t\t36\tYES\tClara Tanner");
        assert_eq!(lines.len(), 2 + roster.len());
    }

    #[test]
    fn test_roster_table_marks_inexperienced_players() {
        let roster = get_sample_roster();
        let table = format_roster_table(&roster.players);
        assert!(table.contains("Eva Gordon\t\t45\tNO\tWendy Gordon, Mike Gordon"));
    }

    #[test]
    fn test_empty_roster_table_is_just_the_header() {
        let table = format_roster_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_division_summary() {
        let config = get_league_config();
        let teams = assign(get_sample_roster(), &config.team_names()).unwrap();
        let summary = format_division_summary(&teams);

        insta::assert_snapshot!(summary, @r###"
        Dragons:
          47 in  Chloe Alaska
          44 in  Ben Finkelstein
          43 in  Bill Bon
          42 in  Joe Smith
          41 in  Kimmy Stein
          36 in  Jill Tanner
          6 players (3 experienced, 3 inexperienced), total height 253 in, average 42.2 in

        Sharks:
          45 in  Herschel Krustofski
          45 in  Eva Gordon
          43 in  Arnold Willis
          42 in  Les Clay
          41 in  Diego Soto
          40 in  Matt Gill
          6 players (3 experienced, 3 inexperienced), total height 256 in, average 42.7 in

        Raptors:
          45 in  Sammy Adams
          44 in  Phillip Helm
          44 in  Suzane Greenberg
          42 in  Karl Saygan
          41 in  Sal Dali
          39 in  Joe Kavalier
          6 players (3 experienced, 3 inexperienced), total height 255 in, average 42.5 in
        "###);
    }

    #[test]
    fn test_division_summary_of_empty_team_is_header_and_stats() {
        let teams = vec![crate::models::Team::new("Bears")];
        let summary = format_division_summary(&teams);
        assert_eq!(
            summary,
            "Bears:\n  0 players (0 experienced, 0 inexperienced), total height 0 in, average 0.0 in"
        );
    }
}
