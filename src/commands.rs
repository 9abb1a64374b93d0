//! Command execution.

use crate::Commands;
use colored::Colorize;
use dfakit_core::{Dfa, RunOutcome, Verdict};
use serde_json::json;

/// Executes a one-shot command and returns the formatted output.
pub fn execute(cmd: Commands) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        Commands::Simulate { .. } | Commands::New { .. } => unreachable!(),

        Commands::Run {
            config,
            inputs,
            json,
        } => {
            let dfa = load(&config)?;

            let mut output = Vec::new();
            for input in &inputs {
                let outcome = dfakit_core::run(&dfa, input);
                if json {
                    output.push(
                        serde_json::to_string(&json!({
                            "input": input,
                            "outcome": outcome,
                        }))?,
                    );
                } else {
                    output.push(format_outcome(input, &outcome));
                }
            }
            Ok(output.join("\n"))
        }

        Commands::Show { config, json } => {
            let dfa = load(&config)?;
            let fingerprint = dfakit_storage::fingerprint(&dfa);

            if json {
                Ok(serde_json::to_string_pretty(&json!({
                    "num_states": dfa.num_states(),
                    "initial": dfa.initial(),
                    "accepting": dfa.accepting(),
                    "transitions": dfa.transitions(),
                    "fingerprint": fingerprint,
                }))?)
            } else {
                Ok(format_definition(&dfa, &fingerprint))
            }
        }

        Commands::Check { config } => {
            let dfa = load(&config)?;
            Ok(format!(
                "{} {} ({} states, {} transitions, fingerprint {})",
                "Valid".green(),
                config.display(),
                dfa.num_states(),
                dfa.table().count_defined(),
                dfakit_storage::fingerprint(&dfa)
            ))
        }
    }
}

fn load(path: &std::path::Path) -> Result<Dfa, Box<dyn std::error::Error>> {
    dfakit_storage::load_path(path)
        .map_err(|e| format!("[{}] {}", e.error_code(), e).into())
}

/// Formats a run outcome the way the interactive loop prints it.
pub fn format_outcome(input: &str, outcome: &RunOutcome) -> String {
    let mut lines = Vec::new();

    for c in &outcome.skipped {
        lines.push(format!(
            "{}: invalid input character '{}', skipped",
            "Warning".yellow(),
            c
        ));
    }
    for step in &outcome.trace {
        lines.push(format!("  {} -- {} --> {}", step.from, step.symbol, step.to));
    }
    if let Some(halt) = &outcome.halted {
        lines.push(format!(
            "  no transition from state {} on '{}'",
            halt.state, halt.symbol
        ));
    }

    let verdict = match outcome.verdict {
        Verdict::Accepted => "accepted".green(),
        Verdict::Rejected => "rejected".red(),
    };
    lines.push(format!(
        "{} {} (final state {})",
        format!("'{}'", input).cyan(),
        verdict,
        outcome.final_state
    ));

    lines.join("\n")
}

/// Formats a definition for display.
pub fn format_definition(dfa: &Dfa, fingerprint: &str) -> String {
    let accepting: Vec<String> = dfa.accepting().iter().map(|s| s.to_string()).collect();

    let mut out = String::new();
    out.push_str(&"DFA definition:\n".bold().to_string());
    out.push_str(&format!("  States:       {}\n", dfa.num_states()));
    out.push_str(&format!("  Initial:      {}\n", dfa.initial()));
    out.push_str(&format!("  Accepting:    [{}]\n", accepting.join(", ")));
    out.push_str(&format!(
        "  Transitions:  {} declared, {} defined\n",
        dfa.declared_transitions(),
        dfa.table().count_defined()
    ));
    for (from, symbol, to) in dfa.table().iter() {
        out.push_str(&format!("    {} -- {} --> {}\n", from, symbol, to));
    }
    out.push_str(&format!("  Fingerprint:  {}", fingerprint));
    out
}
