//! Saving definitions in canonical form.

use crate::error::StorageError;
use dfakit_core::Dfa;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the canonical text form of a definition.
///
/// The transition count is re-derived from the table, and transitions are
/// emitted in ascending `(state, symbol)` order. Loading a saved definition
/// and saving it again therefore yields byte-identical output.
pub fn canonical_text(dfa: &Dfa) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", dfa.num_states()));
    out.push_str(&format!("{}\n", dfa.initial()));
    out.push_str(&format!("{}\n", dfa.accepting().len()));

    let accepting: Vec<String> = dfa.accepting().iter().map(|s| s.to_string()).collect();
    out.push_str(&accepting.join(" "));
    out.push('\n');

    out.push_str(&format!("{}\n", dfa.table().count_defined()));
    for (from, symbol, to) in dfa.table().iter() {
        out.push_str(&format!("{} {} {}\n", from, symbol, to));
    }

    out
}

/// A short integrity fingerprint over the canonical text.
pub fn fingerprint(dfa: &Dfa) -> String {
    format!("{:08x}", crc32c::crc32c(canonical_text(dfa).as_bytes()))
}

/// Writes the canonical form to a writer.
pub fn save(dfa: &Dfa, mut writer: impl Write) -> Result<(), StorageError> {
    writer.write_all(canonical_text(dfa).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes the canonical form to a file, replacing any existing content.
pub fn save_path(dfa: &Dfa, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let file = File::create(path.as_ref())?;
    save(dfa, BufWriter::new(file))?;
    tracing::debug!("saved definition to {}", path.as_ref().display());
    Ok(())
}
