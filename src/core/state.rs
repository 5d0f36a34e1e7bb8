//! State labels for automaton states.
//!
//! A state carries no attributes besides its label. Labels are the tokens
//! read from the input file, so they never contain whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the start state.
///
/// The input format has no way to declare a start state, so state `"0"`
/// is the start state by convention, whether or not the input mentions it.
pub const START_STATE: &str = "0";

/// Label identifying a single automaton state.
///
/// # Example
///
/// ```rust
/// use dfaviz::core::StateLabel;
///
/// let label = StateLabel::from("q1");
/// assert_eq!(label.as_str(), "q1");
/// assert!(!label.is_start());
/// assert!(StateLabel::start().is_start());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateLabel(String);

impl StateLabel {
    /// Create a label from any string-like value.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The conventional start state `"0"`.
    pub fn start() -> Self {
        Self::new(START_STATE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the conventional start state.
    pub fn is_start(&self) -> bool {
        self.0 == START_STATE
    }

    /// Check if the label could have come from a whitespace-split input line.
    ///
    /// Valid labels are non-empty and contain no whitespace.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && !self.0.chars().any(char::is_whitespace)
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for StateLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}
