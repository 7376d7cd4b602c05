// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The resolver only needs to ask "is this sentence annotated,
// and with what?". Putting that question behind a trait lets
// the data layer hand it insertion-ordered dictionaries built
// from files while tests hand it a few literal entries.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::domain::annotation::Annotation;

// ─── AnnotationLookup ─────────────────────────────────────────────────────────
/// Anything that maps a sentence to its annotation.
///
/// Implementations:
///   - IndexMap<String, Annotation> → dictionaries built from annotation files
///   - HashMap<String, Annotation>  → ad-hoc fixtures
pub trait AnnotationLookup {
    /// The annotation of `sentence`, matched exactly (case and whitespace sensitive)
    fn annotation(&self, sentence: &str) -> Option<&Annotation>;
}

impl<S: BuildHasher> AnnotationLookup for IndexMap<String, Annotation, S> {
    fn annotation(&self, sentence: &str) -> Option<&Annotation> {
        self.get(sentence)
    }
}

impl<S: BuildHasher> AnnotationLookup for HashMap<String, Annotation, S> {
    fn annotation(&self, sentence: &str) -> Option<&Annotation> {
        self.get(sentence)
    }
}

impl<T: AnnotationLookup + ?Sized> AnnotationLookup for &T {
    fn annotation(&self, sentence: &str) -> Option<&Annotation> {
        (**self).annotation(sentence)
    }
}
