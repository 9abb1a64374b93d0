//! Dense transition tables.

use crate::alphabet::{Symbol, ALPHABET_LEN};
use crate::definition::StateId;

/// A dense `num_states x 26` transition table.
///
/// Cells are `None` until written; an undefined cell is distinct from any
/// valid target state. The table is built once during definition
/// construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    num_states: usize,
    cells: Vec<Option<StateId>>,
}

impl TransitionTable {
    /// Creates an empty table for `num_states` states.
    pub fn new(num_states: usize) -> Self {
        Self {
            num_states,
            cells: vec![None; num_states * ALPHABET_LEN],
        }
    }

    fn cell(&self, state: StateId, symbol: Symbol) -> usize {
        state * ALPHABET_LEN + symbol.index()
    }

    /// Records a transition. Overwrites any prior entry for the same
    /// `(state, symbol)` pair; last write wins.
    ///
    /// `state` and `next` must be valid state indices. The builder is the
    /// only writer and validates both before calling.
    pub fn set(&mut self, state: StateId, symbol: Symbol, next: StateId) {
        let idx = self.cell(state, symbol);
        self.cells[idx] = Some(next);
    }

    /// Looks up the transition for `(state, symbol)`, `None` if undefined.
    pub fn get(&self, state: StateId, symbol: Symbol) -> Option<StateId> {
        self.cells.get(self.cell(state, symbol)).copied().flatten()
    }

    /// Number of defined entries.
    pub fn count_defined(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates defined entries in ascending `(state, symbol)` order.
    ///
    /// This ordering is the canonical serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|next| {
                let state = idx / ALPHABET_LEN;
                let symbol = Symbol::from_index(idx % ALPHABET_LEN).unwrap();
                (state, symbol, next)
            })
        })
    }
}
