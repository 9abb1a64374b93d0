//! dfakit - Deterministic Finite Automaton toolkit
//!
//! Loads DFA definitions from text config files, simulates input strings,
//! and authors new definitions interactively.

mod commands;
mod repl;
mod wizard;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dfakit")]
#[command(about = "Deterministic finite automaton toolkit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate input strings against a definition
    Run {
        /// Path to the definition file
        config: PathBuf,

        /// Input strings (lowercase letters)
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Emit one JSON object per input instead of text
        #[arg(long)]
        json: bool,
    },

    /// Interactively simulate input strings (type 'quit' to exit)
    Simulate {
        /// Path to the definition file
        config: PathBuf,
    },

    /// Author a new definition interactively and save it
    New {
        /// Path to write the definition to
        path: PathBuf,
    },

    /// Display a definition
    Show {
        /// Path to the definition file
        config: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a definition file
    Check {
        /// Path to the definition file
        config: PathBuf,
    },
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { config } => dfakit_storage::load_path(&config)
            .map_err(|e| format!("[{}] {}", e.error_code(), e).into())
            .and_then(|dfa| repl::run(&dfa, &config)),
        Commands::New { path } => wizard::run(&path),
        cmd => commands::execute(cmd).map(|output| println!("{}", output)),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red(), e);
        std::process::exit(1);
    }
}
