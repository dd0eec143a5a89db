use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use nameof_parser::corpus::{check_file, CaseOutcome, CORPUS_EXTENSION};
use nameof_parser::tracing_setup::set_up_tracing;
use rayon::prelude::*;
use tracing::{error, info, warn};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(about = "Check every *.jsonl description corpus under a directory.")]
struct Args {
    /// Directory to scan.
    dir: PathBuf,

    /// Maximum number of mismatches to print.
    #[arg(long, default_value_t = 20)]
    max_report: usize,

    /// Log more (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn find_corpus_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == CORPUS_EXTENSION))
        .collect()
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    set_up_tracing(args.verbose).context("failed to install the trace subscriber")?;

    let files = find_corpus_files(&args.dir);
    println!("Found {} corpus files in {}", files.len(), args.dir.display());

    let cases = AtomicUsize::new(0);
    let mismatches = AtomicUsize::new(0);
    let broken_files = AtomicUsize::new(0);
    let start = Instant::now();

    files.par_iter().for_each(|path| {
        let report = match check_file(path) {
            Ok(report) => report,
            Err(err) => {
                broken_files.fetch_add(1, Ordering::Relaxed);
                error!("{:#}", anyhow::Error::new(err));
                return;
            }
        };
        info!("{}: {} cases", path.display(), report.cases);
        cases.fetch_add(report.cases, Ordering::Relaxed);

        for (line, outcome) in &report.mismatches {
            let count = mismatches.fetch_add(1, Ordering::Relaxed);
            if count >= args.max_report {
                continue;
            }
            if let CaseOutcome::Mismatch { field, expected, actual } = outcome {
                println!(
                    "MISMATCH {}:{line} [{field}] expected `{expected}`, got `{actual}`",
                    path.display()
                );
            }
        }
    });

    let mismatches = mismatches.into_inner();
    let broken_files = broken_files.into_inner();

    println!("\n--------------------------------------------------");
    println!("Checked in {:.2?}", start.elapsed());
    println!("Files: {} ({} unreadable)", files.len(), broken_files);
    println!("Cases: {}", cases.into_inner());
    println!("Mismatches: {}", mismatches);

    if mismatches == 0 && broken_files == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
