//! Parser for the flat DFA text format.
//!
//! The format is line oriented:
//!
//! ```text
//! 1 2
//! 0 a 1
//! 1 b 2
//! 2 c 0
//! ```
//!
//! Line 1 lists the accepting states. Every following line is either a
//! transition `source symbol target` or is skipped. Skipped lines never
//! stop the parse; each one is recorded in the [`ParseReport`].

pub mod line;

pub use line::{parse_accepting_line, parse_transition_line, LineOutcome, SkipReason, SkippedLine};

use crate::builder::AutomatonBuilder;
use crate::core::Automaton;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// What happened to each line of the input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Number of accepting-state tokens on line 1 (before de-duplication)
    pub accepting_tokens: usize,

    /// Number of lines that parsed as transitions
    pub transition_lines: usize,

    /// Transitions dropped because an identical one came first
    pub duplicate_transitions: usize,

    /// Lines that did not produce a transition
    pub skipped: Vec<SkippedLine>,

    /// Whether the input mentions the start state `"0"` anywhere
    pub start_state_declared: bool,
}

impl ParseReport {
    /// Lines skipped for having the wrong number of tokens.
    pub fn malformed_lines(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::WrongTokenCount { .. }))
            .count()
    }

    pub fn blank_lines(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| s.reason == SkipReason::Blank)
            .count()
    }
}

/// Parsed automaton together with its parse report.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedAutomaton {
    pub automaton: Automaton,
    pub report: ParseReport,
}

/// Parse the text format into an automaton.
///
/// # Example
///
/// ```rust
/// use dfaviz::parser::parse;
///
/// let parsed = parse("1 2 \n0 a 1\n3 d\n1 b 2\n");
///
/// assert_eq!(parsed.automaton.accepting().len(), 2);
/// assert_eq!(parsed.automaton.transitions().len(), 2);
/// assert_eq!(parsed.report.malformed_lines(), 1);
/// ```
pub fn parse(input: &str) -> ParsedAutomaton {
    let mut lines = input.lines();
    let mut report = ParseReport::default();

    let accepting = lines.next().map(parse_accepting_line).unwrap_or_default();
    report.accepting_tokens = accepting.len();
    let mut builder = AutomatonBuilder::new().accepting_states(accepting);

    // Transition lines start on line 2.
    for (index, text) in lines.enumerate() {
        let line = index + 2;
        let outcome = parse_transition_line(text);
        match outcome {
            LineOutcome::Transition(transition) => {
                report.transition_lines += 1;
                builder = builder.transition(transition);
            }
            LineOutcome::Blank => {
                trace!(line, "skipping blank line");
                report.skipped.push(SkippedLine {
                    line,
                    reason: SkipReason::Blank,
                });
            }
            LineOutcome::Malformed { tokens } => {
                debug!(line, tokens, content = text, "skipping malformed transition line");
                report.skipped.push(SkippedLine {
                    line,
                    reason: SkipReason::WrongTokenCount { found: tokens },
                });
            }
        }
    }

    // Tokens come from `split_whitespace`, so every label and symbol is
    // non-empty and whitespace-free: the builder has nothing to reject.
    let automaton = builder
        .build()
        .expect("whitespace-split tokens are always valid labels");
    report.duplicate_transitions = automaton.duplicates_collapsed();
    report.start_state_declared = automaton.declares_start_state();

    if !report.start_state_declared {
        warn!("state \"0\" is never mentioned; the start edge points at an otherwise empty state");
    }

    ParsedAutomaton { automaton, report }
}
