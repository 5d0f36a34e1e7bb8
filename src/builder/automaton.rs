//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Automaton, StateLabel, Transition};
use std::collections::HashSet;

/// Builder for constructing automata with a fluent API.
///
/// Duplicates are accepted while building and collapsed by [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    accepting: Vec<StateLabel>,
    transitions: Vec<Transition>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, label: impl Into<StateLabel>) -> Self {
        self.accepting.push(label.into());
        self
    }

    /// Mark several states as accepting at once.
    pub fn accepting_states<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<StateLabel>,
    {
        self.accepting.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Add a transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the automaton.
    /// Returns an error if a label or symbol could not appear in the text format.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let mut accepting: Vec<StateLabel> = Vec::with_capacity(self.accepting.len());
        let mut seen_accepting: HashSet<StateLabel> =
            HashSet::with_capacity(self.accepting.len());
        for label in self.accepting {
            validate_label(&label)?;
            if seen_accepting.insert(label.clone()) {
                accepting.push(label);
            }
        }

        let mut transitions: Vec<Transition> = Vec::with_capacity(self.transitions.len());
        let mut seen: HashSet<Transition> = HashSet::with_capacity(self.transitions.len());
        let mut duplicates = 0;
        for transition in self.transitions {
            validate_label(&transition.source)?;
            validate_label(&transition.target)?;
            if transition.symbol.is_empty() || transition.symbol.chars().any(char::is_whitespace) {
                return Err(BuildError::InvalidSymbol {
                    symbol: transition.symbol,
                });
            }

            if seen.insert(transition.clone()) {
                transitions.push(transition);
            } else {
                duplicates += 1;
            }
        }

        Ok(Automaton::from_parts(accepting, transitions, duplicates))
    }
}

fn validate_label(label: &StateLabel) -> Result<(), BuildError> {
    if label.is_valid() {
        Ok(())
    } else {
        Err(BuildError::InvalidStateLabel {
            label: label.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_states_from_all_sources() {
        let automaton = AutomatonBuilder::new()
            .accepting_states(["1", "2"])
            .transition(Transition::new("0", "a", "1"))
            .transition(Transition::new("1", "b", "2"))
            .transition(Transition::new("2", "c", "3"))
            .build()
            .unwrap();

        let states: Vec<&str> = automaton.states().iter().map(StateLabel::as_str).collect();
        assert_eq!(states, vec!["1", "2", "0", "3"]);
        assert_eq!(automaton.transitions().len(), 3);
    }

    #[test]
    fn builder_collapses_duplicate_transitions() {
        let automaton = AutomatonBuilder::new()
            .transitions(vec![
                Transition::new("0", "a", "1"),
                Transition::new("0", "a", "1"),
                Transition::new("0", "b", "1"),
            ])
            .build()
            .unwrap();

        assert_eq!(automaton.transitions().len(), 2);
        assert_eq!(automaton.duplicates_collapsed(), 1);
    }

    #[test]
    fn builder_collapses_duplicate_accepting_states() {
        let automaton = AutomatonBuilder::new()
            .accepting("1")
            .accepting("1")
            .build()
            .unwrap();

        assert_eq!(automaton.accepting().len(), 1);
    }

    #[test]
    fn builder_rejects_whitespace_label() {
        let result = AutomatonBuilder::new().accepting("a b").build();

        assert!(matches!(result, Err(BuildError::InvalidStateLabel { .. })));
    }

    #[test]
    fn builder_rejects_empty_endpoint() {
        let result = AutomatonBuilder::new()
            .transition(Transition::new("", "a", "1"))
            .build();

        assert_eq!(
            result,
            Err(BuildError::InvalidStateLabel {
                label: String::new()
            })
        );
    }

    #[test]
    fn builder_rejects_empty_symbol() {
        let result = AutomatonBuilder::new()
            .transition(Transition::new("0", "", "1"))
            .build();

        assert!(matches!(result, Err(BuildError::InvalidSymbol { .. })));
    }

    #[test]
    fn large_input_keeps_first_occurrence_order() {
        let n = 20_000;
        let unique = (0..n).map(|i| Transition::new(i.to_string(), "a", (i + 1).to_string()));
        let repeated = (0..n).map(|i| Transition::new(i.to_string(), "a", (i + 1).to_string()));

        let automaton = AutomatonBuilder::new()
            .accepting_states((0..n).map(|i| i.to_string()))
            .transitions(unique.chain(repeated))
            .build()
            .unwrap();

        assert_eq!(automaton.transitions().len(), n);
        assert_eq!(automaton.duplicates_collapsed(), n);
        assert_eq!(automaton.states().len(), n + 1);
        assert_eq!(
            automaton.transitions()[n - 1],
            Transition::new((n - 1).to_string(), "a", n.to_string())
        );
        assert_eq!(automaton.states()[n].as_str(), n.to_string());
    }

    #[test]
    fn empty_builder_yields_start_state_only() {
        let automaton = AutomatonBuilder::new().build().unwrap();

        assert_eq!(automaton.states(), &[StateLabel::start()]);
        assert!(automaton.accepting().is_empty());
        assert!(automaton.transitions().is_empty());
    }
}
