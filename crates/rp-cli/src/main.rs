//! CLI frontend for the Runeplan character build planner.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rp",
    about = "Runeplan: plan character builds from a starting class",
    version,
    propagate_version = true
)]
struct Cli {
    /// Load classes from this characters.json instead of the built-in list
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List starting classes with their level and attributes
    Classes,

    /// Show the build sheet for a class
    Show {
        /// Class name (case-insensitive)
        class: String,

        /// Set an attribute, e.g. `--set vigor=40` (repeatable)
        #[arg(short, long = "set", value_name = "ATTR=VALUE")]
        set: Vec<String>,

        /// Print the build as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show rune costs for a level
    Cost {
        /// Current level
        level: u32,

        /// Target level: print the runes needed to get there instead
        #[arg(long)]
        to: Option<u32>,
    },

    /// Print a lookup table (health, focus, stamina, equip-load, runes)
    Table {
        /// Table name
        stat: String,

        /// First row (inclusive)
        #[arg(long)]
        from: Option<u32>,

        /// Last row (inclusive)
        #[arg(long)]
        to: Option<u32>,
    },

    /// Plan a build interactively, reading commands from stdin
    Plan {
        /// Class to start from
        #[arg(short, long, default_value = "wretch")]
        class: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = cli.data.as_deref();

    let result = match cli.command {
        Commands::Classes => commands::classes::run(data),
        Commands::Show { class, set, json } => commands::show::run(data, &class, &set, json),
        Commands::Cost { level, to } => commands::cost::run(level, to),
        Commands::Table { stat, from, to } => commands::table::run(&stat, from, to),
        Commands::Plan { class } => commands::plan::run(data, &class),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
