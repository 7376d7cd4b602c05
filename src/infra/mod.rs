// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-level concerns shared by the workflows:
//
//   layout.rs — where the input files live; defaults match the
//               annotated-subtitle tree, overridable from JSON
//
//   table.rs  — the tab-separated corpus table (csv crate)
//
//   report.rs — per-pair alignment counters saved as JSON
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Input file locations
pub mod layout;

/// Corpus table writer and reader
pub mod table;

/// Alignment report persistence
pub mod report;
