// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw input files and the aligned
// records:
//
//   annotation / pairs files
//       │
//       ▼
//   loader            → reads a file, runs a line parser per line,
//       │               counts skipped lines
//       ▼
//   dictionaries      → the three line formats and their builders
//       │
//       ▼
//   context           → dictionaries shared by every language pair
//       │
//       ▼
//   aligner           → joins two languages on the pivot sentence
//       │
//       ▼
//   resolver          → picks one annotation per triple
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Line-by-line dictionary loading with skip counters
pub mod loader;

/// Annotation, reconstruction and pairs dictionaries
pub mod dictionaries;

/// Shared read-only dictionaries for a run
pub mod context;

/// Joins language pairs on pivot sentences
pub mod aligner;

/// Direct-then-projected annotation precedence
pub mod resolver;
