// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands and their flags:
//   align    — build corpus tables for language pairs
//   collapse — recompute the binary column of a table
//   check    — list rows with conflicting majorities
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::align_use_case::{AlignConfig, LanguagePair};
use crate::application::collapse_use_case::CollapseConfig;
use crate::domain::sentiment::TieBreak;
use crate::infra::layout::InputLayout;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Align pivot sentences across language pairs and write corpus tables
    Align(AlignArgs),

    /// Recompute the binary label column of an existing table
    Collapse(CollapseArgs),

    /// Report rows whose annotation has conflicting majorities
    Check(CheckArgs),
}

/// Arguments for the `align` command
#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Target language pair, e.g. `de,fr`. Repeat for several pairs
    #[arg(long = "pair", required = true)]
    pub pairs: Vec<LanguagePair>,

    /// Directory the input layout is resolved against
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// JSON file overriding the input layout (replaces --data-dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Source subset whose base sentences need reconstruction
    #[arg(long, default_value = "da")]
    pub special_source: String,

    /// Directory for the `{pivot}_{lang1}_{lang2}_pd.tsv` tables
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Exact output file (single pair only)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// How tied votes collapse: `first-seen` or `negative`
    #[arg(long, default_value = "first-seen")]
    pub tie_break: TieBreak,

    /// Also write a `.report.json` with skip and resolution counters
    #[arg(long)]
    pub report: bool,
}

impl From<AlignArgs> for AlignConfig {
    fn from(a: AlignArgs) -> Self {
        AlignConfig {
            layout: InputLayout {
                special_source: a.special_source,
                ..InputLayout::rooted_at(a.data_dir)
            },
            pairs:        a.pairs,
            output_dir:   a.output_dir,
            output:       a.output,
            tie_break:    a.tie_break,
            write_report: a.report,
        }
    }
}

/// Arguments shared by commands that read an existing table
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Corpus table to read
    #[arg(long)]
    pub input: PathBuf,

    /// First target language of the table
    #[arg(long)]
    pub lang1: String,

    /// Second target language of the table
    #[arg(long)]
    pub lang2: String,

    /// Pivot language of the table
    #[arg(long, default_value = "en")]
    pub pivot_lang: String,
}

/// Arguments for the `collapse` command
#[derive(Args, Debug)]
pub struct CollapseArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Where to write the result; must differ from --input
    #[arg(long)]
    pub output: PathBuf,

    /// How tied votes collapse: `first-seen` or `negative`
    #[arg(long, default_value = "first-seen")]
    pub tie_break: TieBreak,
}

impl From<CollapseArgs> for CollapseConfig {
    fn from(a: CollapseArgs) -> Self {
        CollapseConfig {
            input:      a.table.input,
            output:     Some(a.output),
            pivot_lang: a.table.pivot_lang,
            lang1:      a.table.lang1,
            lang2:      a.table.lang2,
            tie_break:  a.tie_break,
        }
    }
}

/// Arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub table: TableArgs,
}

impl From<CheckArgs> for CollapseConfig {
    fn from(a: CheckArgs) -> Self {
        CollapseConfig {
            input:      a.table.input,
            output:     None,
            pivot_lang: a.table.pivot_lang,
            lang1:      a.table.lang1,
            lang2:      a.table.lang2,
            tie_break:  TieBreak::default(),
        }
    }
}
