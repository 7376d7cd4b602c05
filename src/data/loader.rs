// ============================================================
// Layer 4 — Line Loader
// ============================================================
// Reads a tab-separated input file and feeds it, line by line,
// through a line parser into an insertion-ordered dictionary.
//
// Every line parser returns a LineOutcome:
//   Parsed((key, value))  → inserted (later duplicates overwrite
//                           the value, the key keeps its slot)
//   Skipped(reason)       → counted in the LoadReport
//
// A missing or unreadable file is fatal; a bad line never is.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt,
    fs,
    hash::Hash,
    path::Path,
};

/// Why a line contributed nothing to its dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The line did not have the expected number of tab-separated fields
    FieldCount,
    /// The annotation column held a non-integer code
    InvalidCode,
    /// The annotation column was empty
    EmptyAnnotation,
    /// A special-source row whose base sentence has no pivot equivalent
    UnknownDerivedSentence,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::FieldCount             => "wrong field count",
            SkipReason::InvalidCode            => "non-integer code",
            SkipReason::EmptyAnnotation        => "empty annotation",
            SkipReason::UnknownDerivedSentence => "no pivot sentence for derived sentence",
        };
        f.write_str(s)
    }
}

/// Result of parsing one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<T> {
    Parsed(T),
    Skipped(SkipReason),
}

/// Counters collected while loading one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Path of the file that was read
    pub source: String,

    /// Number of lines in the file
    pub lines: usize,

    /// Lines that parsed successfully
    pub parsed: usize,

    /// Distinct keys in the resulting dictionary.
    /// Less than `parsed` when keys repeat.
    pub entries: usize,

    /// Lines skipped, by reason
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl LoadReport {
    /// Total number of skipped lines across all reasons
    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Lines whose key was already present and got overwritten
    pub fn overwritten(&self) -> usize {
        self.parsed.saturating_sub(self.entries)
    }
}

/// A dictionary together with the report of how it was built.
#[derive(Debug, Clone)]
pub struct Loaded<D> {
    pub dict:   D,
    pub report: LoadReport,
}

/// Read a whole file into memory.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Cannot read input file '{}'", path.display()))
}

/// Build a dictionary from raw text, one line at a time.
///
/// `source` only labels the report and log lines.
pub fn build_dict<K, V, F>(
    source: &str,
    text:   &str,
    mut parse: F,
) -> Loaded<IndexMap<K, V>>
where
    K: Hash + Eq,
    F: FnMut(&str) -> LineOutcome<(K, V)>,
{
    let mut dict   = IndexMap::new();
    let mut report = LoadReport {
        source: source.to_string(),
        ..LoadReport::default()
    };

    for (n, line) in text.lines().enumerate() {
        report.lines += 1;

        match parse(line) {
            LineOutcome::Parsed((key, value)) => {
                report.parsed += 1;
                dict.insert(key, value);
            }
            LineOutcome::Skipped(reason) => {
                tracing::debug!("{}:{}: skipped ({})", source, n + 1, reason);
                *report.skipped.entry(reason).or_insert(0) += 1;
            }
        }
    }

    report.entries = dict.len();
    Loaded { dict, report }
}

/// Read `path` and build a dictionary from its lines.
pub fn load_dict<K, V, F>(path: &Path, parse: F) -> Result<Loaded<IndexMap<K, V>>>
where
    K: Hash + Eq,
    F: FnMut(&str) -> LineOutcome<(K, V)>,
{
    let text   = read_source(path)?;
    let source = path.display().to_string();
    let loaded = build_dict(&source, &text, parse);

    tracing::info!(
        "Loaded '{}': {} entries from {} lines ({} skipped, {} overwritten)",
        source,
        loaded.report.entries,
        loaded.report.lines,
        loaded.report.total_skipped(),
        loaded.report.overwritten(),
    );

    Ok(loaded)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn split_pair(line: &str) -> LineOutcome<(String, String)> {
        match line.split_once('=') {
            Some((k, v)) => LineOutcome::Parsed((k.to_string(), v.to_string())),
            None         => LineOutcome::Skipped(SkipReason::FieldCount),
        }
    }

    #[test]
    fn test_counts_lines_and_skips() {
        let loaded = build_dict("mem", "a=1\nbroken\nb=2\n", split_pair);
        assert_eq!(loaded.report.lines, 3);
        assert_eq!(loaded.report.parsed, 2);
        assert_eq!(loaded.report.entries, 2);
        assert_eq!(loaded.report.skipped.get(&SkipReason::FieldCount), Some(&1));
        assert_eq!(loaded.report.total_skipped(), 1);
    }

    #[test]
    fn test_last_write_wins_and_keeps_first_position() {
        let loaded = build_dict("mem", "a=1\nb=2\na=3", split_pair);
        assert_eq!(loaded.dict.get("a").map(String::as_str), Some("3"));
        let keys: Vec<&str> = loaded.dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(loaded.report.overwritten(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.tsv");
        let err  = load_dict(&path, split_pair).unwrap_err();
        assert!(err.to_string().contains("absent.tsv"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let loaded = build_dict("mem", "a=1\r\nb=2\r\n", split_pair);
        assert_eq!(loaded.dict.get("a").map(String::as_str), Some("1"));
        assert_eq!(loaded.dict.get("b").map(String::as_str), Some("2"));
    }
}
