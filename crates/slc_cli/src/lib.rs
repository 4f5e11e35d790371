//! League CLI Library
//!
//! Roster loading (JSON / CSV) and letter file output for the command-line
//! driver. The draft itself lives in `slc_core`.

use anyhow::{anyhow, bail, Context, Result};
use slc_core::{get_sample_roster, Player, Roster, WelcomeLetter};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads a roster from `path`, dispatching on the file extension (`.csv` or
/// JSON for anything else). With no path, the bundled signup sheet is used.
pub fn load_roster(path: Option<&Path>) -> Result<Roster> {
    match path {
        None => Ok(get_sample_roster().clone()),
        Some(path) => {
            let is_csv = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("csv"))
                .unwrap_or(false);
            if is_csv {
                load_roster_csv(path)
            } else {
                load_roster_json(path)
            }
        }
    }
}

/// Loads a roster from a JSON array of players.
pub fn load_roster_json(path: &Path) -> Result<Roster> {
    let json_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;

    let players: Vec<Player> = serde_json::from_str(&json_str)
        .with_context(|| format!("Failed to parse roster JSON: {}", path.display()))?;

    Ok(players.into())
}

/// Loads a roster from CSV with a header row.
///
/// Expected columns: `name,height_in,experienced,guardians`, where
/// `experienced` is one of true/false/yes/no/1/0 and `guardians` is a
/// semicolon-separated list. Any malformed row aborts the load; a signup
/// sheet with a silently dropped player would produce a wrong draft.
pub fn load_roster_csv(path: &Path) -> Result<Roster> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut players = Vec::new();
    for (i, result) in reader.records().enumerate() {
        // 1-based data row, counting the header line.
        let line = i + 2;
        let record = result.with_context(|| format!("Line {}: invalid CSV record", line))?;
        if record.len() < 4 {
            bail!("Line {}: expected 4 columns, found {}", line, record.len());
        }

        let name = record[0].trim();
        if name.is_empty() {
            bail!("Line {}: player name is empty", line);
        }

        let height_in: u32 = record[1]
            .trim()
            .parse()
            .with_context(|| format!("Line {}: invalid height '{}'", line, record[1].trim()))?;

        let experienced = parse_flag(record[2].trim()).ok_or_else(|| {
            anyhow!("Line {}: invalid experienced flag '{}'", line, record[2].trim())
        })?;

        let guardians: Vec<String> = record[3]
            .split(';')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(String::from)
            .collect();
        if guardians.is_empty() {
            bail!("Line {}: player '{}' has no guardians", line, name);
        }

        players.push(Player {
            name: name.to_string(),
            height_in,
            experienced,
            guardians,
        });
    }

    Ok(players.into())
}

fn parse_flag(value: &str) -> Option<bool> {
    if ["true", "yes", "1"].iter().any(|v| value.eq_ignore_ascii_case(v)) {
        Some(true)
    } else if ["false", "no", "0"].iter().any(|v| value.eq_ignore_ascii_case(v)) {
        Some(false)
    } else {
        None
    }
}

/// Writes one `.txt` file per letter into `out_dir`, named after the
/// guardian. Guardians with several players on file get numbered suffixes
/// so no letter overwrites another.
///
/// Returns the written paths in letter order.
pub fn write_letters(letters: &[WelcomeLetter], out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut paths = Vec::with_capacity(letters.len());
    for letter in letters {
        let base = guardian_filename(&letter.guardian);
        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        let file_name = if *count == 1 {
            format!("{}.txt", base)
        } else {
            format!("{}_{}.txt", base, count)
        };

        let path = out_dir.join(file_name);
        fs::write(&path, format!("{}\n", letter.body))
            .with_context(|| format!("Failed to write letter: {}", path.display()))?;
        paths.push(path);
    }

    Ok(paths)
}

/// Lowercases a guardian name into a safe file stem: alphanumeric runs are
/// kept, everything else collapses to single underscores.
pub fn guardian_filename(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut gap = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !stem.is_empty() {
                stem.push('_');
            }
            gap = false;
            stem.push(c.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }
    if stem.is_empty() {
        stem.push_str("guardian");
    }
    stem
}
