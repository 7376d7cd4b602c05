// ============================================================
// Layer 4 — Label Resolver
// ============================================================
// Picks the annotation for one aligned triple.
//
// Precedence (first match wins):
//   1. The pivot sentence was annotated by a human
//        → use that annotation, whatever the projections say
//   2. Both target sentences have projected annotations and
//      the two are identical (same codes, same order)
//        → use the projected annotation
//   3. Otherwise → no annotation, the triple is left out
//
// Reference: Rust Book §6 (Option), §10 (Generic Types)

use crate::domain::annotation::Annotation;
use crate::domain::record::Resolution;
use crate::domain::traits::AnnotationLookup;

/// Resolves annotations from one human-annotated pivot source
/// and two projected target-language sources.
pub struct LabelResolver<P, A, B> {
    /// Human annotations of pivot sentences
    pivot:   P,
    /// Projected annotations of target-language-1 sentences
    target1: A,
    /// Projected annotations of target-language-2 sentences
    target2: B,
}

impl<P, A, B> LabelResolver<P, A, B>
where
    P: AnnotationLookup,
    A: AnnotationLookup,
    B: AnnotationLookup,
{
    pub fn new(pivot: P, target1: A, target2: B) -> Self {
        Self { pivot, target1, target2 }
    }

    /// Resolve the annotation for (pivot, target1, target2).
    pub fn resolve(
        &self,
        pivot:   &str,
        target1: &str,
        target2: &str,
    ) -> Option<(&Annotation, Resolution)> {
        if let Some(direct) = self.pivot.annotation(pivot) {
            return Some((direct, Resolution::Direct));
        }

        let first  = self.target1.annotation(target1)?;
        let second = self.target2.annotation(target2)?;

        (first == second).then_some((first, Resolution::Projected))
    }
}
