// ============================================================
// Layer 6 — Corpus Table
// ============================================================
// Writes and reads the tab-separated corpus table.
//
// Columns (header names depend on the language pair):
//   en_sentence  de_sentence  fr_sentence  multi  binary
//
//   multi  = comma-joined annotation codes, e.g. "2,5,1"
//   binary = collapsed label "0" / "1", empty when no code
//            in the annotation maps to a class
//
// Output example:
//   en_sentence	de_sentence	fr_sentence	multi	binary
//   Hello	Hallo	Bonjour	2	1
//
// Reading renames the columns by position and drops rows that
// have any empty cell, so a table written here reads back
// without its unlabelled rows.
//
// Reference: csv crate documentation

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::{fs, path::Path};

use crate::domain::record::AlignedRecord;
use crate::domain::sentiment::TieBreak;

const DELIMITER: u8 = b'\t';

/// One row of the corpus table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRow {
    pub pivot:   String,
    pub target1: String,
    pub target2: String,
    pub multi:   String,
    pub binary:  String,
}

impl CorpusRow {
    /// Row for an aligned record, with its binary label filled in
    pub fn from_record(record: &AlignedRecord, tie_break: TieBreak) -> Self {
        Self {
            pivot:   record.pivot.clone(),
            target1: record.target1.clone(),
            target2: record.target2.clone(),
            multi:   record.annotation.to_string(),
            binary:  record
                .binary(tie_break)
                .map(|label| label.to_string())
                .unwrap_or_default(),
        }
    }

    fn fields(&self) -> [&str; 5] {
        [
            self.pivot.as_str(),
            self.target1.as_str(),
            self.target2.as_str(),
            self.multi.as_str(),
            self.binary.as_str(),
        ]
    }

    fn has_empty_cell(&self) -> bool {
        self.fields().iter().any(|f| f.is_empty())
    }
}

/// Column names of the table for a language pair
pub fn header(pivot_lang: &str, lang1: &str, lang2: &str) -> [String; 5] {
    [
        format!("{pivot_lang}_sentence"),
        format!("{lang1}_sentence"),
        format!("{lang2}_sentence"),
        "multi".to_string(),
        "binary".to_string(),
    ]
}

/// Write `rows` under `header` to `path`, creating parent directories.
pub fn write_table(path: &Path, header: &[String; 5], rows: &[CorpusRow]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create output directory '{}'", parent.display()))?;
    }

    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .with_context(|| format!("Cannot create table '{}'", path.display()))?;

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer
        .flush()
        .with_context(|| format!("Cannot write table '{}'", path.display()))?;

    tracing::info!("Wrote {} rows to '{}'", rows.len(), path.display());
    Ok(())
}

/// Read a corpus table, skipping rows with an empty cell.
/// Column names in the file are ignored; cells are taken by position.
pub fn read_table(path: &Path) -> Result<Vec<CorpusRow>> {
    Ok(read_indexed_table(path)?
        .into_iter()
        .map(|(_, row)| row)
        .collect())
}

/// Like `read_table`, but each kept row comes with its 0-based
/// data-row index in the file. Dropped rows still use up an index,
/// so the number points at the row as it sits in the file.
pub fn read_indexed_table(path: &Path) -> Result<Vec<(usize, CorpusRow)>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Cannot open table '{}'", path.display()))?;

    let mut rows    = Vec::new();
    let mut dropped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("Bad row {} in '{}'", i + 1, path.display()))?;

        let cell = |n: usize| record.get(n).unwrap_or_default().to_string();
        let row = CorpusRow {
            pivot:   cell(0),
            target1: cell(1),
            target2: cell(2),
            multi:   cell(3),
            binary:  cell(4),
        };

        if row.has_empty_cell() {
            dropped += 1;
            continue;
        }
        rows.push((i, row));
    }

    tracing::info!(
        "Read {} rows from '{}' ({} with empty cells dropped)",
        rows.len(),
        path.display(),
        dropped
    );
    Ok(rows)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::Annotation;
    use crate::domain::record::Resolution;
    use crate::domain::sentiment::collapse_str;

    fn record(pivot: &str, codes: &[i32]) -> AlignedRecord {
        AlignedRecord::new(
            pivot,
            format!("{pivot}-de"),
            format!("{pivot}-fr"),
            Annotation::new(codes.to_vec()).unwrap(),
            Resolution::Direct,
        )
    }

    #[test]
    fn test_header_names() {
        let h = header("en", "de", "fr");
        assert_eq!(h[0], "en_sentence");
        assert_eq!(h[1], "de_sentence");
        assert_eq!(h[2], "fr_sentence");
        assert_eq!(h[3], "multi");
        assert_eq!(h[4], "binary");
    }

    #[test]
    fn test_row_from_record() {
        let row = CorpusRow::from_record(&record("hello", &[2, 5, 1]), TieBreak::FirstSeen);
        assert_eq!(row.multi, "2,5,1");
        assert_eq!(row.binary, "1");
    }

    #[test]
    fn test_unmapped_annotation_leaves_binary_empty() {
        let row = CorpusRow::from_record(&record("odd", &[7]), TieBreak::FirstSeen);
        assert_eq!(row.binary, "");
    }

    #[test]
    fn test_written_binary_matches_recollapsed_multi() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("en_de_fr_pd.tsv");

        let rows: Vec<CorpusRow> = [
            record("a", &[1, 2]),
            record("b", &[1, 3]),
            record("c", &[2, 5, 1]),
            record("d \"quoted\"\tand tabbed", &[8]),
        ]
        .iter()
        .map(|r| CorpusRow::from_record(r, TieBreak::FirstSeen))
        .collect();

        write_table(&path, &header("en", "de", "fr"), &rows).unwrap();
        let back = read_table(&path).unwrap();

        assert_eq!(back, rows);
        for row in &back {
            let again = collapse_str(&row.multi, TieBreak::FirstSeen).unwrap();
            assert_eq!(again.to_string(), row.binary);
        }
    }

    #[test]
    fn test_rows_with_empty_cells_are_dropped_on_read() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.tsv");
        let rows = vec![
            CorpusRow::from_record(&record("kept", &[2]), TieBreak::FirstSeen),
            CorpusRow::from_record(&record("unlabelled", &[7]), TieBreak::FirstSeen),
        ];

        write_table(&path, &header("en", "de", "fr"), &rows).unwrap();
        let back = read_table(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].pivot, "kept");
    }

    #[test]
    fn test_indexes_count_dropped_rows() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.tsv");
        let rows = vec![
            CorpusRow::from_record(&record("unlabelled", &[7]), TieBreak::FirstSeen),
            CorpusRow::from_record(&record("kept", &[2]), TieBreak::FirstSeen),
        ];

        write_table(&path, &header("en", "de", "fr"), &rows).unwrap();
        let back = read_indexed_table(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].0, 1);
        assert_eq!(back[0].1.pivot, "kept");
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_table(&dir.path().join("nope.tsv")).is_err());
    }
}
