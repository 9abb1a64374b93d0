//! Loading definitions from a persisted description.

use crate::error::StorageError;
use dfakit_core::{Dfa, DfaBuilder};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Whitespace token stream with 1-based positions for error reporting.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            iter: source.split_whitespace(),
            pos: 0,
        }
    }

    fn next(&mut self, expected: &str) -> Result<&'a str, StorageError> {
        self.pos += 1;
        self.iter.next().ok_or_else(|| StorageError::Parse {
            token: self.pos,
            reason: format!("unexpected end of input, expected {}", expected),
        })
    }

    fn next_int(&mut self, expected: &str) -> Result<i64, StorageError> {
        let token = self.next(expected)?;
        token.parse::<i64>().map_err(|_| StorageError::Parse {
            token: self.pos,
            reason: format!("expected {} (an integer), got '{}'", expected, token),
        })
    }

    fn next_symbol(&mut self) -> Result<char, StorageError> {
        let token = self.next("a transition symbol")?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(StorageError::Parse {
                token: self.pos,
                reason: format!("expected a single symbol character, got '{}'", token),
            }),
        }
    }
}

/// Loads a definition from a file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Dfa, StorageError> {
    let file = File::open(path.as_ref())?;
    let dfa = load(BufReader::new(file))?;
    tracing::debug!("loaded definition from {}", path.as_ref().display());
    Ok(dfa)
}

/// Loads a definition from a reader.
///
/// Fields are fed to the validating builder as they are read, so the first
/// violation aborts the load with its specific error kind and no partial
/// definition is produced.
pub fn load(mut reader: impl Read) -> Result<Dfa, StorageError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;

    let mut tokens = Tokens::new(&source);

    let mut builder = DfaBuilder::new(tokens.next_int("the state count")?)?;
    builder.set_initial(tokens.next_int("the initial state")?)?;

    let accepting_count = tokens.next_int("the accepting state count")?;
    builder.declare_accepting_count(accepting_count)?;
    for _ in 0..accepting_count {
        builder.add_accepting(tokens.next_int("an accepting state")?)?;
    }

    let transition_count = tokens.next_int("the transition count")?;
    builder.declare_transition_count(transition_count)?;
    for _ in 0..transition_count {
        let from = tokens.next_int("a transition source state")?;
        let symbol = tokens.next_symbol()?;
        let to = tokens.next_int("a transition target state")?;
        builder.add_transition(from, symbol, to)?;
    }

    Ok(builder.finish()?)
}
