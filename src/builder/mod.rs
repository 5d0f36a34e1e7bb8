//! Builder API for automaton construction.
//!
//! The builder validates labels and symbols, collapses duplicates and hands
//! the result to [`Automaton`](crate::core::Automaton).

pub mod automaton;
pub mod error;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
