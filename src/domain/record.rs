// ============================================================
// Layer 3 — AlignedRecord Domain Type
// ============================================================
// One row of the trilingual corpus: a pivot (English) sentence,
// its translations in the two target languages, and the single
// annotation the resolver settled on for the triple.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

use crate::domain::annotation::Annotation;
use crate::domain::sentiment::{collapse, BinaryLabel, TieBreak};

/// Which source an aligned record's annotation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Human annotation of the pivot sentence
    Direct,
    /// Both projected target-language annotations agreed
    Projected,
}

/// A pivot sentence aligned to two target-language sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedRecord {
    pub pivot:      String,
    pub target1:    String,
    pub target2:    String,
    pub annotation: Annotation,
    pub resolution: Resolution,
}

impl AlignedRecord {
    pub fn new(
        pivot:      impl Into<String>,
        target1:    impl Into<String>,
        target2:    impl Into<String>,
        annotation: Annotation,
        resolution: Resolution,
    ) -> Self {
        Self {
            pivot:   pivot.into(),
            target1: target1.into(),
            target2: target2.into(),
            annotation,
            resolution,
        }
    }

    /// The collapsed binary label for this record's annotation
    pub fn binary(&self, tie_break: TieBreak) -> Option<BinaryLabel> {
        collapse(&self.annotation, tie_break)
    }
}
