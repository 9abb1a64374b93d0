//! Interactive simulation loop.

use crate::commands::format_outcome;
use colored::Colorize;
use dfakit_core::Dfa;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::Path;

/// Reads input strings and simulates them until `quit`/`exit` or EOF.
pub fn run(dfa: &Dfa, config: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {} ({} states, initial {})",
        "Simulating".bold().cyan(),
        config.display(),
        dfa.num_states(),
        dfa.initial()
    );
    println!("Enter input strings (a-z), or 'quit' to exit.\n");

    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut rl: Editor<(), DefaultHistory> = Editor::with_config(rl_config)?;

    loop {
        let prompt = format!("{} ", "dfa>".cyan());
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    break;
                }

                let outcome = dfakit_core::run(dfa, line);
                println!("{}\n", format_outcome(line, &outcome));
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                println!("{}: {:?}", "Error".red(), err);
                break;
            }
        }
    }

    Ok(())
}
