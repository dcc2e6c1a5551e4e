//! mirrorcheck — verify that a target directory mirrors a source directory.
//!
//! # Usage
//!
//! ```text
//! mirrorcheck <SOURCE> <TARGET> [--sync-missing] [--overwrite-mismatched]
//!             [--match-by name|path] [--log-file sync_log.txt] [--json]
//! ```
//!
//! Every file under SOURCE is classified OK / MISSING / MISMATCH against
//! TARGET by content checksum, and duplicates within SOURCE are reported.
//! Exit status is non-zero when drift remains unresolved at end of run or
//! any per-file operation failed.

mod logging;

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use mirrorcheck_core::MatchStrategy;
use mirrorcheck_sync::{pipeline, ReconcileOptions, RunSummary};

use logging::RunLog;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "mirrorcheck",
    version,
    about = "Verify that a target directory mirrors a source directory, by content checksum",
    long_about = None,
)]
struct Cli {
    /// Source directory root.
    source: PathBuf,

    /// Target directory root.
    target: PathBuf,

    /// Copy files that are missing from the target.
    #[arg(long)]
    sync_missing: bool,

    /// Overwrite target files whose content does not match the source.
    #[arg(long)]
    overwrite_mismatched: bool,

    /// Matching strategy: 'name' (basename + checksum anywhere in the
    /// target, tolerates moved files) or 'path' (exact relative path).
    #[arg(long, default_value_t = MatchByArg::default())]
    match_by: MatchByArg,

    /// Append the run log to this file (created if absent).
    #[arg(long, default_value = "sync_log.txt")]
    log_file: PathBuf,

    /// Print the machine-readable run summary as JSON on stdout.
    #[arg(long)]
    json: bool,
}

// ---------------------------------------------------------------------------
// Shared MatchStrategy argument — parsed from CLI strings, converts to core
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse [`MatchStrategy`] from CLI args.
#[derive(Debug, Clone, Default)]
struct MatchByArg(MatchStrategy);

impl FromStr for MatchByArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self(MatchStrategy::NameAndContent)),
            "path" => Ok(Self(MatchStrategy::RelativePath)),
            other => Err(format!(
                "unknown match strategy '{other}'; expected: name, path"
            )),
        }
    }
}

impl fmt::Display for MatchByArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<MatchByArg> for MatchStrategy {
    fn from(m: MatchByArg) -> Self {
        m.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(summary) => {
            let unresolved = summary.unresolved();
            if unresolved == 0 && summary.failures.is_empty() {
                println!("{} target mirrors source", "✓".green());
                ExitCode::SUCCESS
            } else {
                println!(
                    "{} {} unresolved, {} failed",
                    "✗".red(),
                    unresolved,
                    summary.failures.len()
                );
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<RunSummary> {
    let mut log = RunLog::open(&cli.log_file)
        .with_context(|| format!("could not open log file '{}'", cli.log_file.display()))?;

    let options = ReconcileOptions {
        sync_missing: cli.sync_missing,
        overwrite_mismatched: cli.overwrite_mismatched,
        strategy: cli.match_by.into(),
    };
    let summary = pipeline::run(&cli.source, &cli.target, &options, &mut log)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(summary)
}
