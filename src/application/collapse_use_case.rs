// ============================================================
// Layer 2 — CollapseUseCase
// ============================================================
// Post-hoc passes over a corpus table that was already written:
//
//   execute() → recompute every `binary` cell from its `multi`
//               cell and write the table back out
//   check()   → list rows whose annotation has more than one
//               vote on each side, for manual review
//
// Rows with an empty cell are dropped when the table is read,
// so the collapsed table is always written to a separate file.

use anyhow::{bail, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::annotation::Annotation;
use crate::domain::sentiment::{collapse_str, has_conflicting_majority, TieBreak};
use crate::infra::table::{header, read_indexed_table, read_table, write_table, CorpusRow};

#[derive(Debug, Clone)]
pub struct CollapseConfig {
    pub input:      PathBuf,
    /// Where `execute` writes; must differ from `input`.
    /// Unused by `check`.
    pub output:     Option<PathBuf>,
    pub pivot_lang: String,
    pub lang1:      String,
    pub lang2:      String,
    pub tie_break:  TieBreak,
}

/// Summary of a collapse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseSummary {
    pub rows:    usize,
    /// Rows whose stored binary label differed from the recomputed one
    pub changed: usize,
}

/// A row flagged by the conflict check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// 0-based data-row index in the file, dropped rows included
    pub index: usize,
    pub row:   CorpusRow,
}

pub struct CollapseUseCase {
    config: CollapseConfig,
}

impl CollapseUseCase {
    pub fn new(config: CollapseConfig) -> Self {
        Self { config }
    }

    /// Recompute the binary column and write the table to `output`.
    /// The input table is never overwritten.
    pub fn execute(&self) -> Result<CollapseSummary> {
        let cfg = &self.config;

        let Some(output) = &cfg.output else {
            bail!("Collapsing needs an output table separate from '{}'", cfg.input.display());
        };
        if same_file(&cfg.input, output) {
            bail!(
                "Refusing to overwrite input table '{}'; rows with empty cells would be lost",
                cfg.input.display()
            );
        }

        let mut rows = read_table(&cfg.input)?;

        let mut changed = 0;
        for row in &mut rows {
            let binary = collapse_str(&row.multi, cfg.tie_break)
                .map(|label| label.to_string())
                .unwrap_or_default();
            if binary != row.binary {
                changed += 1;
                row.binary = binary;
            }
        }

        write_table(output, &header(&cfg.pivot_lang, &cfg.lang1, &cfg.lang2), &rows)?;

        tracing::info!("Collapsed {} rows ({} binary labels changed)", rows.len(), changed);
        Ok(CollapseSummary { rows: rows.len(), changed })
    }

    /// Rows whose annotation has conflicting majorities.
    pub fn check(&self) -> Result<Vec<Conflict>> {
        let rows = read_indexed_table(&self.config.input)?;

        let conflicts: Vec<Conflict> = rows
            .into_iter()
            .filter(|(_, row)| {
                row.multi
                    .parse::<Annotation>()
                    .map(|a| has_conflicting_majority(&a))
                    .unwrap_or(false)
            })
            .map(|(index, row)| Conflict { index, row })
            .collect();

        for c in &conflicts {
            tracing::warn!("Row {} has conflicting majorities: {}", c.index, c.row.multi);
        }
        Ok(conflicts)
    }
}

/// True when both paths name the same file, even if spelled differently
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "en_sentence\tde_sentence\tfr_sentence\tmulti\tbinary\n\
                         a\ta-de\ta-fr\t1,2\t1\n\
                         b\tb-de\tb-fr\t2,5,1\t1\n\
                         c\tc-de\tc-fr\t1,3,2,5\t0\n\
                         d\td-de\td-fr\t2\t\n";

    fn config(dir: &tempfile::TempDir, tie_break: TieBreak) -> CollapseConfig {
        let input = dir.path().join("in.tsv");
        fs::write(&input, TABLE).unwrap();
        CollapseConfig {
            input,
            output:     Some(dir.path().join("out.tsv")),
            pivot_lang: "en".to_string(),
            lang1:      "de".to_string(),
            lang2:      "fr".to_string(),
            tie_break,
        }
    }

    #[test]
    fn test_recomputes_binary_column() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir, TieBreak::FirstSeen);
        let out = cfg.output.clone().unwrap();

        let summary = CollapseUseCase::new(cfg).execute().unwrap();
        // row d has an empty binary cell and is dropped on read
        assert_eq!(summary, CollapseSummary { rows: 3, changed: 1 });

        let rows = read_table(&out).unwrap();
        let binaries: Vec<&str> = rows.iter().map(|r| r.binary.as_str()).collect();
        // "1,2" ties and 1 → 0 comes first
        assert_eq!(binaries, vec!["0", "1", "0"]);
    }

    #[test]
    fn test_negative_tie_break() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir, TieBreak::Negative);
        let out = cfg.output.clone().unwrap();

        CollapseUseCase::new(cfg).execute().unwrap();
        let rows = read_table(&out).unwrap();
        // "1,3,2,5" ties two-two
        assert_eq!(rows[2].binary, "0");
    }

    #[test]
    fn test_check_flags_conflicting_rows() {
        let dir = tempfile::tempdir().unwrap();
        let conflicts = CollapseUseCase::new(config(&dir, TieBreak::FirstSeen)).check().unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].index, 2);
        assert_eq!(conflicts[0].row.pivot, "c");
    }

    #[test]
    fn test_check_index_counts_rows_dropped_before_it() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("dropped_first.tsv");
        fs::write(
            &input,
            "en_sentence\tde_sentence\tfr_sentence\tmulti\tbinary\n\
             a\ta-de\ta-fr\t7\t\n\
             b\tb-de\tb-fr\t1,3,2,5\t0\n",
        )
        .unwrap();

        let cfg = CollapseConfig {
            input,
            output: None,
            ..config(&dir, TieBreak::FirstSeen)
        };
        let conflicts = CollapseUseCase::new(cfg).check().unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].index, 1);
        assert_eq!(conflicts[0].row.pivot, "b");
    }

    #[test]
    fn test_execute_without_output_leaves_input_alone() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = CollapseConfig {
            output: None,
            ..config(&dir, TieBreak::FirstSeen)
        };
        let input = cfg.input.clone();

        assert!(CollapseUseCase::new(cfg).execute().is_err());
        assert_eq!(fs::read_to_string(&input).unwrap(), TABLE);
    }

    #[test]
    fn test_execute_refuses_to_overwrite_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(&dir, TieBreak::FirstSeen);
        // same file, spelled through a `.` component
        cfg.output = Some(dir.path().join(".").join("in.tsv"));
        let input = cfg.input.clone();

        assert!(CollapseUseCase::new(cfg).execute().is_err());
        assert_eq!(fs::read_to_string(&input).unwrap(), TABLE);
    }
}
