//! # dfakit-storage
//!
//! Persisted DFA description format for dfakit.
//!
//! The format is a sequence of whitespace-separated tokens, in fixed order:
//! state count, initial state, accepting-state count, accepting states,
//! transition count, then `(from symbol to)` triples. Symbols are literal
//! lowercase letters. Saving is canonical: the transition count is re-derived
//! from the table and transitions are emitted in ascending `(state, symbol)`
//! order, so a load/save cycle is idempotent.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::StorageError;
pub use reader::{load, load_path};
pub use writer::{canonical_text, fingerprint, save, save_path};
