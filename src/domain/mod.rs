// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing what the corpus is
// made of: annotations, binary labels and aligned records.
//
// Rules for this layer:
//   - NO file I/O
//   - NO logging
//   - Only plain structs, enums, traits and pure functions
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Multi-label annotation (ordered category codes)
pub mod annotation;

// Code table, majority-vote collapse and tie-breaking
pub mod sentiment;

// A pivot sentence aligned to two target sentences
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;
