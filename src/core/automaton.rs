//! The parsed automaton: accepting states, transitions and the full state set.

use super::state::StateLabel;
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A deterministic finite automaton as described by the input file.
///
/// Nothing here checks determinism or reachability. The automaton records
/// what the input says, with two normalisations:
///
/// - accepting states and transitions are de-duplicated, keeping the
///   first occurrence
/// - the state set is explicit: it holds every accepting state, every
///   transition endpoint and the start state `"0"`
///
/// Construct one with [`AutomatonBuilder`](crate::builder::AutomatonBuilder).
///
/// # Example
///
/// ```rust
/// use dfaviz::builder::AutomatonBuilder;
/// use dfaviz::core::Transition;
///
/// let automaton = AutomatonBuilder::new()
///     .accepting("1")
///     .transition(Transition::new("0", "a", "1"))
///     .build()
///     .unwrap();
///
/// assert!(automaton.is_accepting("1"));
/// assert_eq!(automaton.states().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Automaton {
    accepting: Vec<StateLabel>,
    transitions: Vec<Transition>,
    states: Vec<StateLabel>,
    duplicates_collapsed: usize,
}

impl Automaton {
    /// Assemble an automaton from already de-duplicated parts.
    ///
    /// State order: accepting states as declared, then the start state,
    /// then transition endpoints by first reference.
    pub(crate) fn from_parts(
        accepting: Vec<StateLabel>,
        transitions: Vec<Transition>,
        duplicates_collapsed: usize,
    ) -> Self {
        let mut states: Vec<StateLabel> = Vec::new();
        let mut seen: HashSet<StateLabel> = HashSet::new();
        let mut push = |label: &StateLabel| {
            if seen.insert(label.clone()) {
                states.push(label.clone());
            }
        };

        for label in &accepting {
            push(label);
        }
        push(&StateLabel::start());
        for transition in &transitions {
            push(&transition.source);
            push(&transition.target);
        }

        Self {
            accepting,
            transitions,
            states,
            duplicates_collapsed,
        }
    }

    /// Accepting states in declaration order.
    pub fn accepting(&self) -> &[StateLabel] {
        &self.accepting
    }

    /// Distinct transitions in input order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Every state of the automaton, start state included.
    pub fn states(&self) -> &[StateLabel] {
        &self.states
    }

    pub fn start_state(&self) -> StateLabel {
        StateLabel::start()
    }

    pub fn is_accepting(&self, label: &str) -> bool {
        self.accepting.iter().any(|s| s.as_str() == label)
    }

    pub fn contains_state(&self, label: &str) -> bool {
        self.states.iter().any(|s| s.as_str() == label)
    }

    /// Number of transitions dropped because an identical one came first.
    pub fn duplicates_collapsed(&self) -> usize {
        self.duplicates_collapsed
    }

    /// Check if the start state appears anywhere in the description.
    ///
    /// When it does not, the start state exists only because of the
    /// `"0"` convention.
    pub fn declares_start_state(&self) -> bool {
        self.is_accepting(super::state::START_STATE)
            || self
                .transitions
                .iter()
                .any(|t| t.source.is_start() || t.target.is_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<StateLabel> {
        names.iter().map(|n| StateLabel::from(*n)).collect()
    }

    #[test]
    fn states_follow_first_appearance() {
        let automaton = Automaton::from_parts(
            labels(&["2", "1"]),
            vec![
                Transition::new("3", "a", "1"),
                Transition::new("1", "b", "4"),
            ],
            0,
        );

        assert_eq!(automaton.states(), labels(&["2", "1", "0", "3", "4"]).as_slice());
    }

    #[test]
    fn start_state_always_present() {
        let automaton = Automaton::from_parts(Vec::new(), Vec::new(), 0);

        assert_eq!(automaton.states(), labels(&["0"]).as_slice());
        assert!(automaton.contains_state("0"));
        assert!(!automaton.declares_start_state());
    }

    #[test]
    fn accepting_start_state_is_not_repeated() {
        let automaton = Automaton::from_parts(labels(&["0"]), Vec::new(), 0);

        assert_eq!(automaton.states().len(), 1);
        assert!(automaton.declares_start_state());
    }

    #[test]
    fn start_state_declared_by_transition() {
        let automaton =
            Automaton::from_parts(Vec::new(), vec![Transition::new("1", "a", "0")], 0);

        assert!(automaton.declares_start_state());
    }

    #[test]
    fn undeclared_start_state_detected() {
        let automaton = Automaton::from_parts(
            labels(&["q1"]),
            vec![Transition::new("q0", "a", "q1")],
            0,
        );

        assert!(!automaton.declares_start_state());
        assert!(automaton.contains_state("0"));
    }
}
