// ============================================================
// Layer 3 — Annotation Domain Type
// ============================================================
// A multi-label sentiment annotation for one sentence.
//
// Annotators may tag a sentence several times, so an annotation
// is an ordered sequence of integer category codes rather than
// a single value. The order is significant: two annotations are
// equal only when they hold the same codes in the same order.
//
// On disk an annotation is written comma-joined:
//   "2,5,1"  →  Annotation([2, 5, 1])
//
// Reference: Rust Book §8 (Vectors), §9 (Error Handling)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a raw annotation string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationError {
    /// The string held no codes at all
    Empty,
    /// At least one comma-separated element was not an integer
    InvalidCode,
}

impl fmt::Display for AnnotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationError::Empty       => write!(f, "annotation has no codes"),
            AnnotationError::InvalidCode => write!(f, "annotation contains a non-integer code"),
        }
    }
}

impl std::error::Error for AnnotationError {}

/// An ordered, non-empty sequence of sentiment category codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation(Vec<i32>);

impl Annotation {
    /// Build an annotation from codes.
    /// Returns `None` for an empty sequence.
    pub fn new(codes: Vec<i32>) -> Option<Self> {
        if codes.is_empty() {
            None
        } else {
            Some(Self(codes))
        }
    }

    /// The codes in their original order
    pub fn codes(&self) -> &[i32] {
        &self.0
    }
}

/// Parses the comma-joined form. Whitespace around each code is
/// tolerated (" 2, 5" → [2, 5]); anything else non-numeric fails.
impl FromStr for Annotation {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(AnnotationError::Empty);
        }

        let codes = s
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| AnnotationError::InvalidCode)?;

        Ok(Self(codes))
    }
}

/// Writes the comma-joined form used in the `multi` column.
impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_codes_in_order() {
        let a: Annotation = "5,2,1".parse().unwrap();
        assert_eq!(a.codes(), &[5, 2, 1]);
    }

    #[test]
    fn test_tolerates_spaces_around_codes() {
        let a: Annotation = " 2 , 8".parse().unwrap();
        assert_eq!(a.codes(), &[2, 8]);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!("".parse::<Annotation>(), Err(AnnotationError::Empty));
        assert_eq!("   ".parse::<Annotation>(), Err(AnnotationError::Empty));
    }

    #[test]
    fn test_rejects_non_integer_code() {
        assert_eq!("2,x".parse::<Annotation>(), Err(AnnotationError::InvalidCode));
        assert_eq!("2,,5".parse::<Annotation>(), Err(AnnotationError::InvalidCode));
        assert_eq!("1.5".parse::<Annotation>(), Err(AnnotationError::InvalidCode));
    }

    #[test]
    fn test_display_is_comma_joined() {
        let a = Annotation::new(vec![2, 5, 1]).unwrap();
        assert_eq!(a.to_string(), "2,5,1");
    }

    #[test]
    fn test_new_rejects_empty_vec() {
        assert!(Annotation::new(Vec::new()).is_none());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = Annotation::new(vec![1, 2]).unwrap();
        let b = Annotation::new(vec![2, 1]).unwrap();
        assert_ne!(a, b);
    }
}
