//! League CLI
//!
//! Prints rosters, drafts teams, and writes guardian welcome letters.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use slc_core::{
    assign, format_division_summary, format_roster_table, generate_welcome_letters,
    get_league_config, LetterLocalizer,
};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "slc_cli")]
#[command(about = "Divide a youth soccer league roster into balanced teams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print the signup roster as a table
    Roster {
        /// Roster file (.json or .csv); defaults to the bundled sample
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Draft the roster onto the configured teams
    Divide {
        /// Roster file (.json or .csv); defaults to the bundled sample
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Draft the roster and write welcome letters for every guardian
    Letters {
        /// Roster file (.json or .csv); defaults to the bundled sample
        #[arg(long)]
        input: Option<PathBuf>,

        /// Directory for the letter files
        #[arg(long)]
        out_dir: PathBuf,

        /// Letter language (e.g. "en-US", "es-US")
        #[arg(long, default_value = "en-US")]
        locale: String,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Roster { input } => {
            let roster = slc_cli::load_roster(input.as_deref())?;
            println!("{}", format_roster_table(&roster.players));
            println!(
                "\n{} players ({} experienced, {} inexperienced)",
                roster.len(),
                roster.experienced_count(),
                roster.inexperienced_count()
            );
        }

        Commands::Divide { input } => {
            let roster = slc_cli::load_roster(input.as_deref())?;
            let config = get_league_config();
            let names = config.team_names();
            println!("⚽ Drafting {} players onto {} teams...\n", roster.len(), names.len());

            let teams = assign(&roster, &names)?;
            println!("{}", format_division_summary(&teams));
        }

        Commands::Letters { input, out_dir, locale } => {
            let roster = slc_cli::load_roster(input.as_deref())?;
            let config = get_league_config();
            let teams = assign(&roster, &config.team_names())?;

            let mut localizer = LetterLocalizer::new();
            let negotiated = localizer.negotiate_locale(&[locale.as_str()]);
            if negotiated != locale {
                eprintln!("Warning: locale '{}' is not available, using {}", locale, negotiated);
            }
            localizer.set_locale(&negotiated)?;

            println!("✉️  Generating {} letters...", negotiated);
            let letters = generate_welcome_letters(&teams, config, &localizer)?;
            let paths = slc_cli::write_letters(&letters, &out_dir)?;

            for path in &paths {
                println!("   {}", path.display());
            }
            println!("✅ Wrote {} letters to {}", paths.len(), out_dir.display());
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("slc_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
