// ============================================================
// Layer 6 — Run Report
// ============================================================
// Saves the counters of an aligned pair next to its table as
// pretty-printed JSON:
//
//   out/en_de_fr_pd.tsv
//   out/en_de_fr_pd.report.json   ← overlap, direct/projected
//                                   resolutions, skipped lines
//
// Reference: serde_json documentation

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::data::aligner::AlignmentReport;

/// Report path for a table: same directory and stem, `.report.json`
pub fn report_path(table: &Path) -> PathBuf {
    let stem = table
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("corpus");
    table.with_file_name(format!("{stem}.report.json"))
}

/// Write `report` to `path` as JSON.
pub fn save_report(report: &AlignmentReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create report '{}'", path.display()))?;

    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("Cannot serialise report to '{}'", path.display()))?;

    tracing::debug!("Saved alignment report: '{}'", path.display());
    Ok(())
}
