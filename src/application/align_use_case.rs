// ============================================================
// Layer 2 — AlignUseCase
// ============================================================
// Builds the corpus table for one or more language pairs:
//
//   Step 1: Load the shared dictionaries once   (Layer 4 - data)
//   Step 2: Align every pair, in parallel       (Layer 4 - data)
//   Step 3: Collapse labels and write the table (Layer 6 - infra)
//   Step 4: Optionally save the pair's report   (Layer 6 - infra)
//
// Pairs do not share anything mutable. Each worker borrows the
// same PipelineContext and owns its own per-language dictionaries.
//
// Reference: Rust Book §16 (Fearless Concurrency)
//            rayon documentation

use anyhow::{bail, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, path::PathBuf, str::FromStr};

use crate::data::aligner::{AlignmentReport, CorpusAligner};
use crate::data::context::PipelineContext;
use crate::domain::sentiment::TieBreak;
use crate::infra::{
    layout::InputLayout,
    report::{report_path, save_report},
    table::{header, write_table, CorpusRow},
};

// ─── LanguagePair ─────────────────────────────────────────────────────────────
/// Two target languages, written `de,fr` on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    pub lang1: String,
    pub lang2: String,
}

impl LanguagePair {
    pub fn new(lang1: impl Into<String>, lang2: impl Into<String>) -> Self {
        Self { lang1: lang1.into(), lang2: lang2.into() }
    }
}

impl FromStr for LanguagePair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once(',') else {
            return Err(format!("expected two languages like 'de,fr', got '{s}'"));
        };
        let (a, b) = (a.trim(), b.trim());

        if a.is_empty() || b.is_empty() {
            return Err(format!("empty language code in '{s}'"));
        }
        if a == b {
            return Err(format!("a pair needs two different languages, got '{s}'"));
        }
        Ok(Self::new(a, b))
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lang1, self.lang2)
    }
}

// ─── Align Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignConfig {
    pub layout:       InputLayout,
    pub pairs:        Vec<LanguagePair>,
    pub output_dir:   PathBuf,
    /// Exact output file; only allowed with a single pair
    pub output:       Option<PathBuf>,
    pub tie_break:    TieBreak,
    pub write_report: bool,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            layout:       InputLayout::default(),
            pairs:        vec![LanguagePair::new("de", "fr")],
            output_dir:   PathBuf::from("."),
            output:       None,
            tie_break:    TieBreak::default(),
            write_report: false,
        }
    }
}

/// What was produced for one pair.
#[derive(Debug, Clone)]
pub struct PairOutcome {
    pub pair:   LanguagePair,
    pub table:  PathBuf,
    pub rows:   usize,
    pub report: AlignmentReport,
}

// ─── AlignUseCase ─────────────────────────────────────────────────────────────
pub struct AlignUseCase {
    config: AlignConfig,
}

impl AlignUseCase {
    pub fn new(config: AlignConfig) -> Self {
        Self { config }
    }

    /// Table path for a pair: `--output` if given, otherwise
    /// `{output_dir}/{pivot}_{lang1}_{lang2}_pd.tsv`
    pub fn table_path(&self, pair: &LanguagePair) -> PathBuf {
        match &self.config.output {
            Some(path) => path.clone(),
            None => self.config.output_dir.join(format!(
                "{}_{}_{}_pd.tsv",
                self.config.layout.pivot_lang, pair.lang1, pair.lang2
            )),
        }
    }

    /// Run every configured pair. The first failing pair aborts the run.
    pub fn execute(&self) -> Result<Vec<PairOutcome>> {
        let cfg = &self.config;

        if cfg.pairs.is_empty() {
            bail!("No language pairs to align");
        }
        if cfg.output.is_some() && cfg.pairs.len() > 1 {
            bail!("An explicit output file only works with a single language pair");
        }

        // two workers on one pair would write the same table
        let mut seen = HashSet::new();
        if let Some(dup) = cfg.pairs.iter().find(|p| !seen.insert(*p)) {
            bail!("Language pair '{}' is listed more than once", dup);
        }

        // ── Step 1: Shared dictionaries ───────────────────────────────────────
        let ctx = PipelineContext::load(cfg.layout.clone())?;

        // ── Steps 2-4: One worker per pair ────────────────────────────────────
        tracing::info!("Aligning {} language pair(s)", cfg.pairs.len());
        cfg.pairs
            .par_iter()
            .map(|pair| self.run_pair(&ctx, pair))
            .collect()
    }

    fn run_pair(&self, ctx: &PipelineContext, pair: &LanguagePair) -> Result<PairOutcome> {
        let cfg = &self.config;

        let alignment = CorpusAligner::new(ctx).align(&pair.lang1, &pair.lang2)?;

        let rows: Vec<CorpusRow> = alignment
            .records
            .iter()
            .map(|r| CorpusRow::from_record(r, cfg.tie_break))
            .collect();

        let unlabelled = rows.iter().filter(|r| r.binary.is_empty()).count();
        if unlabelled > 0 {
            tracing::warn!(
                "{}: {} record(s) have no code with a known sentiment; binary left empty",
                pair,
                unlabelled
            );
        }

        let table = self.table_path(pair);
        write_table(
            &table,
            &header(&cfg.layout.pivot_lang, &pair.lang1, &pair.lang2),
            &rows,
        )?;

        if cfg.write_report {
            save_report(&alignment.report, &report_path(&table))?;
        }

        Ok(PairOutcome {
            pair:   pair.clone(),
            table,
            rows:   rows.len(),
            report: alignment.report,
        })
    }
}
