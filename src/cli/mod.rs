// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands each subcommand to its
// use case in Layer 2. Printing results happens here only.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AlignArgs, CheckArgs, CollapseArgs, Commands};

use crate::application::align_use_case::{AlignConfig, AlignUseCase};
use crate::application::collapse_use_case::CollapseUseCase;
use crate::infra::layout::InputLayout;

#[derive(Parser, Debug)]
#[command(
    name = "trilingual-corpus",
    version = "0.1.0",
    about = "Build a trilingual sentiment corpus by aligning target languages on pivot sentences."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch the subcommand to its use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Align(args)    => run_align(args),
            Commands::Collapse(args) => run_collapse(args),
            Commands::Check(args)    => run_check(args),
        }
    }
}

fn run_align(args: AlignArgs) -> Result<()> {
    let layout_file = args.config.clone();
    let mut config: AlignConfig = args.into();

    // a layout file replaces --data-dir and --special-source entirely
    if let Some(path) = layout_file {
        config.layout = InputLayout::load_json(&path)?;
    }

    let outcomes = AlignUseCase::new(config).execute()?;

    for o in &outcomes {
        println!(
            "{}: {} rows → {} ({} direct, {} projected, {} unresolved)",
            o.pair,
            o.rows,
            o.table.display(),
            o.report.direct,
            o.report.projected,
            o.report.unresolved,
        );
    }
    Ok(())
}

fn run_collapse(args: CollapseArgs) -> Result<()> {
    let summary = CollapseUseCase::new(args.into()).execute()?;
    println!("{} rows, {} binary labels changed", summary.rows, summary.changed);
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let conflicts = CollapseUseCase::new(args.into()).check()?;

    for c in &conflicts {
        println!("{}\t{}\t{}", c.index, c.row.multi, c.row.pivot);
    }
    println!("{} row(s) with conflicting majorities", conflicts.len());
    Ok(())
}
