// ============================================================
// Layer 3 — Label Collapser
// ============================================================
// Collapses a multi-label annotation into a single binary
// sentiment by majority vote.
//
// Code table (fixed):
//   negative → 0 : 1, 3, 4, 6
//   positive → 1 : 2, 5, 8
//   anything else contributes no vote
//
// Example:
//   "2,5,1"  → votes {1: 2, 0: 1} → Positive
//   "1,3"    → votes {0: 2}       → Negative
//   "1,2"    → tie                → decided by TieBreak
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::annotation::Annotation;

/// Codes mapped to the negative class
pub const NEGATIVE_CODES: [i32; 4] = [1, 3, 4, 6];

/// Codes mapped to the positive class
pub const POSITIVE_CODES: [i32; 3] = [2, 5, 8];

/// The collapsed sentiment of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryLabel {
    Negative,
    Positive,
}

impl BinaryLabel {
    /// Look a category code up in the fixed table.
    /// Returns `None` for codes outside both sets.
    pub fn from_code(code: i32) -> Option<Self> {
        if NEGATIVE_CODES.contains(&code) {
            Some(BinaryLabel::Negative)
        } else if POSITIVE_CODES.contains(&code) {
            Some(BinaryLabel::Positive)
        } else {
            None
        }
    }

    /// 0 for negative, 1 for positive
    pub fn as_digit(self) -> u8 {
        match self {
            BinaryLabel::Negative => 0,
            BinaryLabel::Positive => 1,
        }
    }
}

impl fmt::Display for BinaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_digit())
    }
}

/// How an equal number of negative and positive votes is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The class whose code appears first in the annotation wins
    #[default]
    FirstSeen,
    /// Ties always resolve to negative
    Negative,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-seen" => Ok(TieBreak::FirstSeen),
            "negative"   => Ok(TieBreak::Negative),
            other => Err(format!(
                "unknown tie-break '{other}' (expected 'first-seen' or 'negative')"
            )),
        }
    }
}

/// Vote tally over one annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Votes {
    pub negative: usize,
    pub positive: usize,
    /// Class of the first code that mapped to either set
    pub first_seen: Option<BinaryLabel>,
}

impl Votes {
    /// Count the mapped codes of an annotation
    pub fn tally(annotation: &Annotation) -> Self {
        let mut votes = Votes::default();

        for label in annotation.codes().iter().filter_map(|&c| BinaryLabel::from_code(c)) {
            match label {
                BinaryLabel::Negative => votes.negative += 1,
                BinaryLabel::Positive => votes.positive += 1,
            }
            votes.first_seen.get_or_insert(label);
        }

        votes
    }
}

/// Collapse an annotation to a binary label by majority vote.
///
/// Returns `None` only when no code in the annotation is in the
/// table, since then there is nothing to vote on.
pub fn collapse(annotation: &Annotation, tie_break: TieBreak) -> Option<BinaryLabel> {
    let votes = Votes::tally(annotation);

    if votes.negative > votes.positive {
        Some(BinaryLabel::Negative)
    } else if votes.positive > votes.negative {
        Some(BinaryLabel::Positive)
    } else {
        match tie_break {
            // first_seen is None exactly when both counts are zero
            TieBreak::FirstSeen => votes.first_seen,
            TieBreak::Negative  => votes.first_seen.map(|_| BinaryLabel::Negative),
        }
    }
}

/// Parse a comma-joined annotation string and collapse it.
/// Unparseable input collapses to `None`.
pub fn collapse_str(multi: &str, tie_break: TieBreak) -> Option<BinaryLabel> {
    multi
        .parse::<Annotation>()
        .ok()
        .and_then(|a| collapse(&a, tie_break))
}

/// True when both classes got more than one vote.
/// These rows are worth a manual look before trusting the majority.
pub fn has_conflicting_majority(annotation: &Annotation) -> bool {
    let votes = Votes::tally(annotation);
    votes.negative > 1 && votes.positive > 1
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn ann(codes: &[i32]) -> Annotation {
        Annotation::new(codes.to_vec()).unwrap()
    }

    #[test]
    fn test_code_table() {
        for c in NEGATIVE_CODES {
            assert_eq!(BinaryLabel::from_code(c), Some(BinaryLabel::Negative));
        }
        for c in POSITIVE_CODES {
            assert_eq!(BinaryLabel::from_code(c), Some(BinaryLabel::Positive));
        }
        assert_eq!(BinaryLabel::from_code(7), None);
        assert_eq!(BinaryLabel::from_code(0), None);
    }

    #[test]
    fn test_tie_resolves_to_first_seen() {
        // 1 → 0 comes first
        assert_eq!(collapse_str("1,2", TieBreak::FirstSeen), Some(BinaryLabel::Negative));
        // 2 → 1 comes first
        assert_eq!(collapse_str("2,1", TieBreak::FirstSeen), Some(BinaryLabel::Positive));
    }

    #[test]
    fn test_tie_resolves_to_negative_when_requested() {
        assert_eq!(collapse_str("2,1", TieBreak::Negative), Some(BinaryLabel::Negative));
    }

    #[test]
    fn test_clear_majorities() {
        assert_eq!(collapse_str("1,3", TieBreak::FirstSeen), Some(BinaryLabel::Negative));
        assert_eq!(collapse_str("2,5,1", TieBreak::FirstSeen), Some(BinaryLabel::Positive));
        assert_eq!(collapse_str("8", TieBreak::FirstSeen), Some(BinaryLabel::Positive));
    }

    #[test]
    fn test_unmapped_codes_do_not_vote() {
        // 7 and 9 are ignored, leaving a single positive vote
        assert_eq!(collapse(&ann(&[7, 9, 2]), TieBreak::FirstSeen), Some(BinaryLabel::Positive));
        // tie between 1 and 5; 7 in front must not affect who came first
        assert_eq!(collapse(&ann(&[7, 5, 1]), TieBreak::FirstSeen), Some(BinaryLabel::Positive));
    }

    #[test]
    fn test_no_mapped_codes_gives_none() {
        assert_eq!(collapse(&ann(&[7, 0]), TieBreak::FirstSeen), None);
        assert_eq!(collapse(&ann(&[7]), TieBreak::Negative), None);
    }

    #[test]
    fn test_collapse_str_rejects_garbage() {
        assert_eq!(collapse_str("", TieBreak::FirstSeen), None);
        assert_eq!(collapse_str("a,b", TieBreak::FirstSeen), None);
    }

    #[test]
    fn test_conflicting_majority() {
        assert!(has_conflicting_majority(&ann(&[1, 3, 2, 5])));
        assert!(!has_conflicting_majority(&ann(&[1, 3, 2])));
        assert!(!has_conflicting_majority(&ann(&[1, 2])));
    }

    #[test]
    fn test_tie_break_from_str() {
        assert_eq!("first-seen".parse::<TieBreak>(), Ok(TieBreak::FirstSeen));
        assert_eq!("negative".parse::<TieBreak>(), Ok(TieBreak::Negative));
        assert!("positive".parse::<TieBreak>().is_err());
    }

    #[test]
    fn test_label_display_is_digit() {
        assert_eq!(BinaryLabel::Negative.to_string(), "0");
        assert_eq!(BinaryLabel::Positive.to_string(), "1");
    }
}
