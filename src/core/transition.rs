//! Labeled transitions between automaton states.

use super::state::StateLabel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered triple `(source, symbol, target)`.
///
/// Transitions are plain values. Two transitions are the same edge exactly
/// when all three components are equal.
///
/// # Example
///
/// ```rust
/// use dfaviz::core::Transition;
///
/// let transition = Transition::new("0", "a", "1");
/// assert_eq!(transition.source.as_str(), "0");
/// assert_eq!(transition.symbol, "a");
/// assert_eq!(transition.to_string(), "0 --a--> 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// The state the transition leaves
    pub source: StateLabel,
    /// The input symbol consumed
    pub symbol: String,
    /// The state the transition enters
    pub target: StateLabel,
}

impl Transition {
    pub fn new(
        source: impl Into<StateLabel>,
        symbol: impl Into<String>,
        target: impl Into<StateLabel>,
    ) -> Self {
        Self {
            source: source.into(),
            symbol: symbol.into(),
            target: target.into(),
        }
    }

    /// Check if the transition loops back to its own source.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.source, self.symbol, self.target)
    }
}
