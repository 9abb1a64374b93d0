//! Input-string simulation.

use crate::alphabet::Symbol;
use crate::definition::{Dfa, StateId};
use serde::Serialize;

/// One transition actually taken during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub from: StateId,
    pub symbol: char,
    pub to: StateId,
}

/// Final verdict of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// The undefined move that halted a run early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Halt {
    pub state: StateId,
    pub symbol: char,
}

/// Everything observed during one run. Owned by the caller; the definition
/// itself is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Transitions taken, in order. Skipped characters do not appear.
    pub trace: Vec<Step>,
    pub verdict: Verdict,
    /// State the run ended in.
    pub final_state: StateId,
    /// Characters outside `a..=z`, skipped without a transition.
    pub skipped: Vec<char>,
    /// Set when the run halted on an undefined transition.
    pub halted: Option<Halt>,
}

/// Runs `input` through the definition.
///
/// Characters outside `a..=z` are a recoverable condition: they are logged,
/// recorded in [`RunOutcome::skipped`], and consume no transition. An
/// undefined table entry halts the run immediately with a REJECTED verdict
/// and no further lookups. Otherwise the verdict is ACCEPTED iff the final
/// state is accepting.
///
/// The definition is read-only here, so any number of runs may share one
/// `Dfa` instance.
pub fn run(dfa: &Dfa, input: &str) -> RunOutcome {
    let mut current = dfa.initial();
    let mut trace = Vec::new();
    let mut skipped = Vec::new();
    let mut halted = None;

    for c in input.chars() {
        let Some(symbol) = Symbol::from_char(c) else {
            tracing::warn!("invalid input character '{}': only a-z are allowed", c);
            skipped.push(c);
            continue;
        };

        match dfa.transition(current, symbol) {
            Some(next) => {
                tracing::debug!("{} -- {} --> {}", current, symbol, next);
                trace.push(Step {
                    from: current,
                    symbol: c,
                    to: next,
                });
                current = next;
            }
            None => {
                tracing::debug!("no transition from state {} on '{}'", current, symbol);
                halted = Some(Halt {
                    state: current,
                    symbol: c,
                });
                break;
            }
        }
    }

    let verdict = if halted.is_some() || !dfa.is_accepting(current) {
        Verdict::Rejected
    } else {
        Verdict::Accepted
    };

    RunOutcome {
        trace,
        verdict,
        final_state: current,
        skipped,
        halted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::DfaBuilder;
    use proptest::prelude::*;

    /// Accepts strings of `a*b b* (c c*)?` -- the worked example from the
    /// config format docs.
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
    fn test_accepts_ab_with_trace() {
        let outcome = run(&sample_dfa(), "ab");

        assert_eq!(
            outcome.trace,
            vec![
                Step { from: 0, symbol: 'a', to: 0 },
                Step { from: 0, symbol: 'b', to: 1 },
            ]
        );
        assert_eq!(outcome.verdict, Verdict::Accepted);
        assert_eq!(outcome.final_state, 1);
        assert!(outcome.skipped.is_empty());
        assert!(outcome.halted.is_none());
    }

    #[test]
    fn test_accepts_b() {
        assert_eq!(run(&sample_dfa(), "b").verdict, Verdict::Accepted);
    }

    #[test]
    fn test_rejects_a() {
        let outcome = run(&sample_dfa(), "a");
        assert_eq!(outcome.verdict, Verdict::Rejected);
        assert_eq!(outcome.final_state, 0);
        assert!(outcome.halted.is_none());
    }

    #[test]
    fn test_malformed_character_is_skipped() {
        let outcome = run(&sample_dfa(), "1");

        assert_eq!(outcome.verdict, Verdict::Rejected);
        assert!(outcome.trace.is_empty());
        assert_eq!(outcome.final_state, 0);
        assert_eq!(outcome.skipped, vec!['1']);
        assert!(outcome.halted.is_none());
    }

    #[test]
    fn test_unmapped_letter_halts_not_skips() {
        // 'd' is in the alphabet; the initial state just has no entry for
        // it, so the run halts on the undefined move rather than skipping
        let outcome = run(&sample_dfa(), "d");

        assert_eq!(outcome.verdict, Verdict::Rejected);
        assert!(outcome.trace.is_empty());
        assert_eq!(outcome.final_state, 0);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.halted, Some(Halt { state: 0, symbol: 'd' }));
    }

    #[test]
    fn test_malformed_character_matches_removal() {
        let dfa = sample_dfa();
        let with = run(&dfa, "a1b");
        let without = run(&dfa, "ab");

        assert_eq!(with.trace, without.trace);
        assert_eq!(with.verdict, without.verdict);
        assert_eq!(with.skipped, vec!['1']);
    }

    #[test]
    fn test_undefined_transition_halts_early() {
        // "bca" is stuck at state 2 on 'a'; later characters are never read
        let outcome = run(&sample_dfa(), "bcabbbb");

        assert_eq!(outcome.verdict, Verdict::Rejected);
        assert_eq!(outcome.trace.len(), 2);
        assert_eq!(outcome.halted, Some(Halt { state: 2, symbol: 'a' }));
        // Halting early rejects even though state 2 is accepting
        assert!(sample_dfa().is_accepting(outcome.final_state));
    }

    #[test]
    fn test_empty_input_initial_not_accepting() {
        let outcome = run(&sample_dfa(), "");
        assert_eq!(outcome.verdict, Verdict::Rejected);
        assert!(outcome.trace.is_empty());
    }

    #[test]
    fn test_empty_input_initial_accepting() {
        let mut b = DfaBuilder::new(1).unwrap();
        b.set_initial(0).unwrap();
        b.add_accepting(0).unwrap();
        let dfa = b.finish().unwrap();

        assert_eq!(run(&dfa, "").verdict, Verdict::Accepted);
    }

    proptest! {
        #[test]
        fn prop_run_is_deterministic(input in "[a-f0-9!]{0,40}") {
            let dfa = sample_dfa();
            let first = run(&dfa, &input);
            let second = run(&dfa, &input);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_trace_is_connected(input in "[a-d]{0,40}") {
            let dfa = sample_dfa();
            let outcome = run(&dfa, &input);

            let mut state = dfa.initial();
            for step in &outcome.trace {
                prop_assert_eq!(step.from, state);
                state = step.to;
            }
            prop_assert_eq!(state, outcome.final_state);
        }
    }
}
