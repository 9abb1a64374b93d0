//! The input alphabet: the 26 lowercase ASCII letters.

use std::fmt;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A validated input symbol, stored as its index in `[0, 26)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// Creates a symbol from a character. Returns `None` for anything
    /// outside `a..=z`.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Self(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// Creates a symbol from an alphabet index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// The symbol's index in `[0, 26)`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The symbol as its lowercase letter.
    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
