// ============================================================
// Layer 4 — Dictionary Builders
// ============================================================
// Turns each raw input file into a key → value dictionary.
//
// Three line formats are understood (fields are TAB-separated):
//
//   annotation file    sentence  codes
//                      "I love it"  "2,5"
//
//   reconstruction     ...  pivot-sentence  derived-sentence
//   (special source's  only the last two fields are used;
//    pairs file)       stored as derived → pivot
//
//   pairs file         tag  _  _  _  base-sentence  target-sentence
//                      exactly six fields; when the first path
//                      segment of `tag` is the special source, the
//                      base sentence is first rewritten to its
//                      pivot equivalent through the reconstruction
//                      dictionary
//
// Each raw line is trimmed of surrounding whitespace before it
// is split. Nothing else about a sentence is normalised.
//
// Reference: Rust Book §8 (Strings, Hash Maps)

use anyhow::Result;
use indexmap::IndexMap;
use std::path::Path;

use crate::data::loader::{load_dict, LineOutcome, Loaded, SkipReason};
use crate::domain::annotation::{Annotation, AnnotationError};

/// sentence → annotation
pub type AnnotationDict = IndexMap<String, Annotation>;

/// derived sentence → pivot sentence
pub type ReconstructionDict = IndexMap<String, String>;

/// pivot sentence → target-language sentence
pub type PivotTargetDict = IndexMap<String, String>;

/// Number of fields in a pairs-file line
const PAIRS_FIELDS: usize = 6;

// ─── Line parsers ─────────────────────────────────────────────────────────────

/// Parse `sentence<TAB>code[,code...]`.
pub fn parse_annotation_line(line: &str) -> LineOutcome<(String, Annotation)> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    let [sentence, codes] = fields.as_slice() else {
        return LineOutcome::Skipped(SkipReason::FieldCount);
    };

    match codes.parse::<Annotation>() {
        Ok(annotation) => LineOutcome::Parsed((sentence.to_string(), annotation)),
        Err(AnnotationError::Empty) => LineOutcome::Skipped(SkipReason::EmptyAnnotation),
        Err(AnnotationError::InvalidCode) => LineOutcome::Skipped(SkipReason::InvalidCode),
    }
}

/// Parse a reconstruction line into (derived, pivot).
pub fn parse_reconstruction_line(line: &str) -> LineOutcome<(String, String)> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    match fields.as_slice() {
        [.., pivot, derived] => LineOutcome::Parsed((derived.to_string(), pivot.to_string())),
        _ => LineOutcome::Skipped(SkipReason::FieldCount),
    }
}

/// Parse a pairs line into (pivot, target).
///
/// `special_source` names the source subset whose base sentences
/// are not in the pivot language; those rows go through
/// `reconstruction` and are dropped when it has no entry.
pub fn parse_pairs_line(
    line:           &str,
    special_source: &str,
    reconstruction: &ReconstructionDict,
) -> LineOutcome<(String, String)> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() != PAIRS_FIELDS {
        return LineOutcome::Skipped(SkipReason::FieldCount);
    }

    let tag    = fields[0];
    let base   = fields[4];
    let target = fields[5];

    let subset = tag.split('/').next().unwrap_or_default();
    if subset == special_source {
        match reconstruction.get(base) {
            Some(pivot) => LineOutcome::Parsed((pivot.clone(), target.to_string())),
            None        => LineOutcome::Skipped(SkipReason::UnknownDerivedSentence),
        }
    } else {
        LineOutcome::Parsed((base.to_string(), target.to_string()))
    }
}

// ─── File builders ────────────────────────────────────────────────────────────

/// Build sentence → annotation from an annotation file.
/// Used both for the human-annotated pivot file and for the
/// per-language projection files.
pub fn annotation_dict(path: &Path) -> Result<Loaded<AnnotationDict>> {
    load_dict(path, parse_annotation_line)
}

/// Build derived → pivot from the special source's pairs file.
pub fn pivot_reconstruction_dict(path: &Path) -> Result<Loaded<ReconstructionDict>> {
    load_dict(path, parse_reconstruction_line)
}

/// Build pivot → target from a language's pairs file.
pub fn pivot_to_target_dict(
    path:           &Path,
    special_source: &str,
    reconstruction: &ReconstructionDict,
) -> Result<Loaded<PivotTargetDict>> {
    load_dict(path, |line| parse_pairs_line(line, special_source, reconstruction))
}
