//! DFA definitions and the shared validator.
//!
//! Definitions persist as a whitespace-separated text description:
//!
//! ```text
//! 3       number of states
//! 0       initial state
//! 2       number of accepting states
//! 1 2     accepting states
//! 5       number of transitions
//! 0 a 0   transition: from, symbol, to
//! 0 b 1
//! 1 b 1
//! 1 c 2
//! 2 c 2
//! ```
//!
//! [`DfaBuilder`] is the single validator for both the file loader and the
//! interactive authoring flow: values are checked as they are fed in, and
//! either a fully valid [`Dfa`] is committed by [`DfaBuilder::finish`] or
//! construction fails with a specific [`CoreError`] and nothing escapes.

use crate::alphabet::{Symbol, ALPHABET_LEN};
use crate::error::CoreError;
use crate::table::TransitionTable;
use serde::{Deserialize, Serialize};

/// A state identifier, dense in `[0, num_states)`.
pub type StateId = usize;

/// Maximum number of states in a definition.
pub const MAX_STATES: usize = 100;

/// A single defined transition, in serializable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: StateId,
    pub symbol: char,
    pub to: StateId,
}

/// A validated, immutable DFA definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    num_states: usize,
    initial: StateId,
    accepting: Vec<StateId>,
    table: TransitionTable,
    declared_transitions: usize,
}

impl Dfa {
    /// Number of states.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// The initial state.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Accepting states, deduplicated, in declaration order.
    pub fn accepting(&self) -> &[StateId] {
        &self.accepting
    }

    /// Returns true if `state` is an accepting state.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// Looks up the transition for `(state, symbol)`, `None` if undefined.
    pub fn transition(&self, state: StateId, symbol: Symbol) -> Option<StateId> {
        self.table.get(state, symbol)
    }

    /// The transition table.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// The transition count claimed by the source description.
    ///
    /// Kept for display and consistency checks only; duplicate source
    /// entries collapse in the table, so this may exceed
    /// [`TransitionTable::count_defined`].
    pub fn declared_transitions(&self) -> usize {
        self.declared_transitions
    }

    /// Defined transitions in ascending `(state, symbol)` order.
    pub fn transitions(&self) -> Vec<TransitionRecord> {
        self.table
            .iter()
            .map(|(from, symbol, to)| TransitionRecord {
                from,
                symbol: symbol.as_char(),
                to,
            })
            .collect()
    }
}

/// Incremental validating builder for [`Dfa`].
///
/// Both the storage loader and the authoring wizard feed fields through
/// this builder in the same fixed order, so the validation rules live in
/// exactly one place.
#[derive(Debug)]
pub struct DfaBuilder {
    num_states: usize,
    initial: Option<StateId>,
    accepting: Vec<StateId>,
    declared_transitions: usize,
    table: TransitionTable,
}

impl DfaBuilder {
    /// Starts a builder for `num_states` states.
    pub fn new(num_states: i64) -> Result<Self, CoreError> {
        if num_states < 1 || num_states > MAX_STATES as i64 {
            return Err(CoreError::InvalidStateCount {
                count: num_states,
                max: MAX_STATES,
            });
        }
        let num_states = num_states as usize;
        Ok(Self {
            num_states,
            initial: None,
            accepting: Vec::new(),
            declared_transitions: 0,
            table: TransitionTable::new(num_states),
        })
    }

    fn check_state(&self, state: i64) -> Option<StateId> {
        if state >= 0 && (state as usize) < self.num_states {
            Some(state as usize)
        } else {
            None
        }
    }

    /// Sets the initial state.
    pub fn set_initial(&mut self, state: i64) -> Result<(), CoreError> {
        match self.check_state(state) {
            Some(s) => {
                self.initial = Some(s);
                Ok(())
            }
            None => Err(CoreError::InvalidInitialState {
                state,
                num_states: self.num_states,
            }),
        }
    }

    /// Checks the declared accepting-state count.
    pub fn declare_accepting_count(&self, count: i64) -> Result<(), CoreError> {
        if count < 1 || count > self.num_states as i64 {
            return Err(CoreError::InvalidAcceptingState {
                reason: format!(
                    "accepting state count {} out of range 1..={}",
                    count, self.num_states
                ),
            });
        }
        Ok(())
    }

    /// Adds an accepting state. Duplicates collapse silently.
    pub fn add_accepting(&mut self, state: i64) -> Result<(), CoreError> {
        let state = self
            .check_state(state)
            .ok_or_else(|| CoreError::InvalidAcceptingState {
                reason: format!(
                    "state {} out of range 0..{}",
                    state, self.num_states
                ),
            })?;
        if !self.accepting.contains(&state) {
            self.accepting.push(state);
        }
        Ok(())
    }

    /// Checks and records the declared transition count.
    pub fn declare_transition_count(&mut self, count: i64) -> Result<(), CoreError> {
        let max = self.num_states * ALPHABET_LEN;
        if count < 0 || count > max as i64 {
            return Err(CoreError::InvalidTransitionCount { count, max });
        }
        self.declared_transitions = count as usize;
        Ok(())
    }

    /// Adds a transition. A later entry for the same `(from, symbol)` pair
    /// overwrites the earlier one.
    pub fn add_transition(&mut self, from: i64, symbol: char, to: i64) -> Result<(), CoreError> {
        let from = self
            .check_state(from)
            .ok_or_else(|| CoreError::InvalidTransition {
                reason: format!("source state {} out of range 0..{}", from, self.num_states),
            })?;
        let to = self
            .check_state(to)
            .ok_or_else(|| CoreError::InvalidTransition {
                reason: format!("target state {} out of range 0..{}", to, self.num_states),
            })?;
        let symbol = Symbol::from_char(symbol).ok_or_else(|| CoreError::InvalidTransition {
            reason: format!("symbol '{}' is not a lowercase letter", symbol),
        })?;

        self.table.set(from, symbol, to);
        Ok(())
    }

    /// Commits the definition.
    pub fn finish(self) -> Result<Dfa, CoreError> {
        let initial = self.initial.ok_or(CoreError::InvalidInitialState {
            state: -1,
            num_states: self.num_states,
        })?;
        if self.accepting.is_empty() {
            return Err(CoreError::InvalidAcceptingState {
                reason: "no accepting states declared".to_string(),
            });
        }

        tracing::debug!(
            "built definition: {} states, initial {}, {} accepting, {} transitions",
            self.num_states,
            initial,
            self.accepting.len(),
            self.table.count_defined()
        );

        Ok(Dfa {
            num_states: self.num_states,
            initial,
            accepting: self.accepting,
            table: self.table,
            declared_transitions: self.declared_transitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dfa() -> Dfa {
        let mut b = DfaBuilder::new(3).unwrap();
        b.set_initial(0).unwrap();
        b.declare_accepting_count(2).unwrap();
        b.add_accepting(1).unwrap();
        b.add_accepting(2).unwrap();
        b.declare_transition_count(5).unwrap();
        b.add_transition(0, 'a', 0).unwrap();
        b.add_transition(0, 'b', 1).unwrap();
        b.add_transition(1, 'b', 1).unwrap();
        b.add_transition(1, 'c', 2).unwrap();
        b.add_transition(2, 'c', 2).unwrap();
        b.finish().unwrap()
    }

    #[test]
    fn test_build_sample() {
        let dfa = sample_dfa();

        assert_eq!(dfa.num_states(), 3);
        assert_eq!(dfa.initial(), 0);
        assert_eq!(dfa.accepting(), &[1, 2]);
        assert_eq!(dfa.declared_transitions(), 5);
        assert_eq!(dfa.table().count_defined(), 5);
        assert_eq!(
            dfa.transition(0, Symbol::from_char('b').unwrap()),
            Some(1)
        );
        assert_eq!(dfa.transition(0, Symbol::from_char('d').unwrap()), None);
    }

    #[test]
    fn test_invalid_state_count() {
        assert!(matches!(
            DfaBuilder::new(0),
            Err(CoreError::InvalidStateCount { count: 0, .. })
        ));
        assert!(matches!(
            DfaBuilder::new(-4),
            Err(CoreError::InvalidStateCount { .. })
        ));
        assert!(matches!(
            DfaBuilder::new(101),
            Err(CoreError::InvalidStateCount { .. })
        ));
        assert!(DfaBuilder::new(100).is_ok());
    }

    #[test]
    fn test_invalid_initial_state() {
        let mut b = DfaBuilder::new(3).unwrap();
        assert!(matches!(
            b.set_initial(3),
            Err(CoreError::InvalidInitialState { .. })
        ));
        assert!(matches!(
            b.set_initial(-1),
            Err(CoreError::InvalidInitialState { .. })
        ));
        assert!(b.set_initial(2).is_ok());
    }

    #[test]
    fn test_invalid_accepting_state() {
        let mut b = DfaBuilder::new(2).unwrap();
        assert!(matches!(
            b.declare_accepting_count(0),
            Err(CoreError::InvalidAcceptingState { .. })
        ));
        assert!(matches!(
            b.declare_accepting_count(3),
            Err(CoreError::InvalidAcceptingState { .. })
        ));
        assert!(matches!(
            b.add_accepting(2),
            Err(CoreError::InvalidAcceptingState { .. })
        ));
    }

    #[test]
    fn test_accepting_duplicates_collapse() {
        let mut b = DfaBuilder::new(3).unwrap();
        b.set_initial(0).unwrap();
        b.add_accepting(2).unwrap();
        b.add_accepting(1).unwrap();
        b.add_accepting(2).unwrap();
        let dfa = b.finish().unwrap();

        // Insertion order kept for display
        assert_eq!(dfa.accepting(), &[2, 1]);
    }

    #[test]
    fn test_no_accepting_states_rejected() {
        let mut b = DfaBuilder::new(1).unwrap();
        b.set_initial(0).unwrap();
        assert!(matches!(
            b.finish(),
            Err(CoreError::InvalidAcceptingState { .. })
        ));
    }

    #[test]
    fn test_invalid_transition_count() {
        let mut b = DfaBuilder::new(2).unwrap();
        assert!(matches!(
            b.declare_transition_count(-1),
            Err(CoreError::InvalidTransitionCount { .. })
        ));
        assert!(matches!(
            b.declare_transition_count(53),
            Err(CoreError::InvalidTransitionCount { .. })
        ));
        assert!(b.declare_transition_count(52).is_ok());
    }

    #[test]
    fn test_invalid_transition() {
        let mut b = DfaBuilder::new(2).unwrap();
        assert!(matches!(
            b.add_transition(2, 'a', 0),
            Err(CoreError::InvalidTransition { .. })
        ));
        assert!(matches!(
            b.add_transition(0, 'a', -1),
            Err(CoreError::InvalidTransition { .. })
        ));
        assert!(matches!(
            b.add_transition(0, 'A', 1),
            Err(CoreError::InvalidTransition { .. })
        ));
        assert!(matches!(
            b.add_transition(0, '1', 1),
            Err(CoreError::InvalidTransition { .. })
        ));
        assert!(b.add_transition(0, 'a', 1).is_ok());
    }

    #[test]
    fn test_transition_overwrite_last_wins() {
        let mut b = DfaBuilder::new(2).unwrap();
        b.set_initial(0).unwrap();
        b.add_accepting(1).unwrap();
        b.declare_transition_count(2).unwrap();
        b.add_transition(0, 'a', 0).unwrap();
        b.add_transition(0, 'a', 1).unwrap();
        let dfa = b.finish().unwrap();

        assert_eq!(dfa.transition(0, Symbol::from_char('a').unwrap()), Some(1));
        // Declared count is preserved even though the entries collapsed
        assert_eq!(dfa.declared_transitions(), 2);
        assert_eq!(dfa.table().count_defined(), 1);
    }

    #[test]
    fn test_error_codes() {
        let err = DfaBuilder::new(0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_STATE_COUNT");
    }
}
