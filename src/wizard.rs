//! Interactive definition authoring.
//!
//! Collects the same six fields as the persisted format, in the same order,
//! validating each value through the shared [`DfaBuilder`] so the rules
//! here can never drift from the loader's.

use colored::Colorize;
use dfakit_core::{DfaBuilder, MAX_STATES};
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::Path;

const GUIDE: &str = "\
Definition file format:
  1. Number of states
  2. Initial state
  3. Number of accepting states
  4. Accepting states (space-separated)
  5. Number of transitions
  6. One 'fromState symbol toState' line per transition
";

type Prompt = Editor<(), DefaultHistory>;

/// Runs the authoring wizard and saves the result to `path`.
pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "New DFA definition".bold().cyan());
    println!("{}", GUIDE.dimmed());

    let mut rl: Prompt = Editor::new()?;

    let mut builder = loop {
        let n = read_int(&mut rl, &format!("Number of states [1, {}]: ", MAX_STATES))?;
        match DfaBuilder::new(n) {
            Ok(b) => break b,
            Err(e) => println!("{}: {}", "Invalid".red(), e),
        }
    };

    loop {
        let state = read_int(&mut rl, "Initial state: ")?;
        match builder.set_initial(state) {
            Ok(()) => break,
            Err(e) => println!("{}: {}", "Invalid".red(), e),
        }
    }

    let accepting_count = loop {
        let n = read_int(&mut rl, "Number of accepting states: ")?;
        match builder.declare_accepting_count(n) {
            Ok(()) => break n,
            Err(e) => println!("{}: {}", "Invalid".red(), e),
        }
    };

    for i in 1..=accepting_count {
        loop {
            let state = read_int(&mut rl, &format!("Accepting state {}: ", i))?;
            match builder.add_accepting(state) {
                Ok(()) => break,
                Err(e) => println!("{}: {}", "Invalid".red(), e),
            }
        }
    }

    let transition_count = loop {
        let n = read_int(&mut rl, "Number of transitions: ")?;
        match builder.declare_transition_count(n) {
            Ok(()) => break n,
            Err(e) => println!("{}: {}", "Invalid".red(), e),
        }
    };

    for i in 1..=transition_count {
        loop {
            let line = rl.readline(&format!("Transition {} (fromState symbol toState): ", i))?;
            match parse_transition(&line) {
                Ok((from, symbol, to)) => match builder.add_transition(from, symbol, to) {
                    Ok(()) => break,
                    Err(e) => println!("{}: {}", "Invalid".red(), e),
                },
                Err(reason) => println!("{}: {}", "Invalid".red(), reason),
            }
        }
    }

    let dfa = builder.finish()?;
    dfakit_storage::save_path(&dfa, path)?;

    println!(
        "{} definition to {} (fingerprint {})",
        "Saved".green(),
        path.display(),
        dfakit_storage::fingerprint(&dfa)
    );
    println!("Try it: dfakit simulate {}", path.display());

    Ok(())
}

/// Prompts until the input parses as an integer.
fn read_int(rl: &mut Prompt, prompt: &str) -> Result<i64, Box<dyn std::error::Error>> {
    loop {
        let line = rl.readline(prompt)?;
        match line.trim().parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => println!("{}: expected an integer", "Invalid".red()),
        }
    }
}

fn parse_transition(line: &str) -> Result<(i64, char, i64), String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err("expected 'fromState symbol toState'".to_string());
    }

    let from = parts[0]
        .parse::<i64>()
        .map_err(|_| format!("'{}' is not an integer", parts[0]))?;
    let to = parts[2]
        .parse::<i64>()
        .map_err(|_| format!("'{}' is not an integer", parts[2]))?;

    let mut chars = parts[1].chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(format!("'{}' is not a single symbol character", parts[1])),
    };

    Ok((from, symbol, to))
}
