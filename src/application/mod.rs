// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one user-facing goal.
//
// Rules for this layer:
//   - No line parsing or label logic here (Layers 3 and 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Build the trilingual corpus for one or more language pairs
pub mod align_use_case;

// Re-collapse and check an existing corpus table
pub mod collapse_use_case;
