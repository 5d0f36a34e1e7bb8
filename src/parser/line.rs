//! Per-line parsing of the text format.

use crate::core::{StateLabel, Transition};
use serde::{Deserialize, Serialize};

/// Result of parsing one transition line.
#[derive(Clone, Debug, PartialEq)]
pub enum LineOutcome {
    /// Exactly three tokens: `source symbol target`
    Transition(Transition),

    /// No tokens at all
    Blank,

    /// Any other token count
    Malformed { tokens: usize },
}

/// Why a line did not produce a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    Blank,
    WrongTokenCount { found: usize },
}

/// A line that was skipped, with its 1-based line number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line: usize,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Parse the accepting-state line.
///
/// Tokens are whitespace-separated; the empty token left by a trailing
/// separator is not a state.
pub fn parse_accepting_line(line: &str) -> Vec<StateLabel> {
    line.split_whitespace().map(StateLabel::from).collect()
}

/// Parse a single transition line.
pub fn parse_transition_line(line: &str) -> LineOutcome {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => LineOutcome::Blank,
        [source, symbol, target] => {
            LineOutcome::Transition(Transition::new(*source, *symbol, *target))
        }
        other => LineOutcome::Malformed {
            tokens: other.len(),
        },
    }
}

impl LineOutcome {
    /// The skip reason, if this line does not carry a transition.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Transition(_) => None,
            Self::Blank => Some(SkipReason::Blank),
            Self::Malformed { tokens } => Some(SkipReason::WrongTokenCount { found: *tokens }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepting_line_ignores_trailing_separator() {
        let states = parse_accepting_line("1 2 ");
        assert_eq!(states, vec![StateLabel::from("1"), StateLabel::from("2")]);
    }

    #[test]
    fn accepting_line_without_trailing_separator_keeps_last_token() {
        let states = parse_accepting_line("1 2");
        assert_eq!(states.len(), 2);
    }

    #[test]
    fn empty_accepting_line_has_no_states() {
        assert!(parse_accepting_line("").is_empty());
        assert!(parse_accepting_line(" ").is_empty());
    }

    #[test]
    fn three_tokens_make_a_transition() {
        assert_eq!(
            parse_transition_line("0 a 1"),
            LineOutcome::Transition(Transition::new("0", "a", "1"))
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse_transition_line("  0\ta  1 \r"),
            LineOutcome::Transition(Transition::new("0", "a", "1"))
        );
    }

    #[test]
    fn wrong_token_counts_are_malformed() {
        assert_eq!(
            parse_transition_line("3 d"),
            LineOutcome::Malformed { tokens: 2 }
        );
        assert_eq!(
            parse_transition_line("0 a 1 extra"),
            LineOutcome::Malformed { tokens: 4 }
        );
        assert_eq!(parse_transition_line("x"), LineOutcome::Malformed { tokens: 1 });
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert_eq!(parse_transition_line(""), LineOutcome::Blank);
        assert_eq!(parse_transition_line(" \t "), LineOutcome::Blank);
    }

    #[test]
    fn skip_reason_matches_outcome() {
        assert_eq!(parse_transition_line("0 a 1").skip_reason(), None);
        assert_eq!(parse_transition_line("").skip_reason(), Some(SkipReason::Blank));
        assert_eq!(
            parse_transition_line("3 d").skip_reason(),
            Some(SkipReason::WrongTokenCount { found: 2 })
        );
    }

    #[test]
    fn skipped_line_serializes_flat() {
        let skipped = SkippedLine {
            line: 4,
            reason: SkipReason::WrongTokenCount { found: 2 },
        };
        let json = serde_json::to_value(skipped).unwrap();

        assert_eq!(json["line"], 4);
        assert_eq!(json["reason"], "wrong_token_count");
        assert_eq!(json["found"], 2);
    }
}
