//! Build errors for the automaton builder.

use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid state label {label:?}. Labels must be non-empty and contain no whitespace")]
    InvalidStateLabel { label: String },

    #[error("Invalid transition symbol {symbol:?}. Symbols must be non-empty and contain no whitespace")]
    InvalidSymbol { symbol: String },
}
