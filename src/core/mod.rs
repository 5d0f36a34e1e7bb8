//! Core automaton types.
//!
//! This module contains the pure data model:
//! - State labels and the start-state convention
//! - Labeled transitions
//! - The automaton with its explicit state set
//!
//! Nothing in this module performs I/O.

mod automaton;
mod state;
mod transition;

pub use automaton::Automaton;
pub use state::{StateLabel, START_STATE};
pub use transition::Transition;
