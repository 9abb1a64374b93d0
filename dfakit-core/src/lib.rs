//! # dfakit-core
//!
//! DFA engine for dfakit.
//!
//! This crate provides:
//! - The lowercase-letter alphabet and `Symbol` indexing
//! - Dense transition tables
//! - Definition building and validation
//! - Simulation of input strings to an accept/reject verdict

pub mod alphabet;
pub mod definition;
pub mod error;
pub mod simulator;
pub mod table;

pub use alphabet::{Symbol, ALPHABET_LEN};
pub use definition::{Dfa, DfaBuilder, StateId, TransitionRecord, MAX_STATES};
pub use error::CoreError;
pub use simulator::{run, Halt, RunOutcome, Step, Verdict};
pub use table::TransitionTable;
