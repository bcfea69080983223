//! CLI parsing, progress printing, and outcome rendering.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use hubfetch_core::config;
use hubfetch_core::download;
use hubfetch_core::fetcher::GhCliFetcher;
use hubfetch_core::outcome::{DownloadOutcome, OutcomeStatus};
use hubfetch_core::progress::ProgressEvent;

/// Exit codes: 0 full success, 1 fatal error, 2 partial success.
const EXIT_OK: i32 = 0;
const EXIT_FATAL: i32 = 1;
const EXIT_PARTIAL: i32 = 2;

/// Download a GitHub file or folder into a local directory.
#[derive(Debug, Parser)]
#[command(name = "hubfetch")]
#[command(about = "Download GitHub files and folders by URL", long_about = None)]
pub struct Cli {
    /// GitHub URL: a github.com blob/raw/tree link, or a
    /// raw.githubusercontent.com file link.
    pub url: String,

    /// Destination directory (default: download_dir from config, else ~/Downloads).
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Suppress per-file progress output.
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn run_from_args() -> Result<i32> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let dest_root = cli.dest.unwrap_or_else(|| cfg.effective_download_dir());

    let fetcher = match &cfg.gh_bin {
        Some(bin) => GhCliFetcher::with_binary(bin.clone()),
        None => GhCliFetcher::discover().context("locating the gh binary")?,
    };

    let (progress_tx, progress_rx) = mpsc::channel::<ProgressEvent>();
    let printer = if cli.quiet {
        drop(progress_rx);
        None
    } else {
        Some(thread::spawn(move || print_events(progress_rx)))
    };

    let result = download::run(&fetcher, &cli.url, &dest_root, Some(&progress_tx), None);
    drop(progress_tx);
    if let Some(handle) = printer {
        let _ = handle.join();
    }

    Ok(report(&result?))
}

/// Prints traversal events until the sender side hangs up.
fn print_events(rx: mpsc::Receiver<ProgressEvent>) {
    for event in rx {
        match event {
            ProgressEvent::FileWritten { remote_path, .. } => println!("  {remote_path}"),
            ProgressEvent::FileFailed { remote_path, reason } => {
                eprintln!("  {remote_path}: {reason}")
            }
            ProgressEvent::EntrySkipped { remote_path } => {
                tracing::debug!("skipped {}", remote_path)
            }
            ProgressEvent::FileStarted { .. }
            | ProgressEvent::DirectoryListed { .. }
            | ProgressEvent::Finished { .. } => {}
        }
    }
}

/// Renders the final outcome and picks the exit code.
fn report(outcome: &DownloadOutcome) -> i32 {
    match outcome.status() {
        OutcomeStatus::Complete => {
            println!(
                "Downloaded {} file(s) to {}",
                outcome.files_written,
                outcome.destination_root.display()
            );
            EXIT_OK
        }
        OutcomeStatus::Partial => {
            println!(
                "Downloaded {} file(s) to {}; {} item(s) failed:",
                outcome.files_written,
                outcome.destination_root.display(),
                outcome.failures.len()
            );
            for f in &outcome.failures {
                println!("  {}: {}", f.remote_path, f.reason);
            }
            EXIT_PARTIAL
        }
        OutcomeStatus::Failed => {
            println!(
                "No files downloaded to {}; {} item(s) failed:",
                outcome.destination_root.display(),
                outcome.failures.len()
            );
            for f in &outcome.failures {
                println!("  {}: {}", f.remote_path, f.reason);
            }
            EXIT_FATAL
        }
    }
}
