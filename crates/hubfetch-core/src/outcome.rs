//! Aggregate result of one download invocation.

use std::path::PathBuf;

use crate::target::TargetKind;

/// One recovered per-item failure from a tree download, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFailure {
    /// Remote path of the file or subdirectory that failed.
    pub remote_path: String,
    /// Human-readable cause.
    pub reason: String,
}

/// Three-way classification for user-facing reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Everything downloaded; no failures recorded.
    Complete,
    /// Some files landed, some entries failed.
    Partial,
    /// Nothing landed and at least one entry failed.
    Failed,
}

/// Result of one top-level invocation.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub kind: TargetKind,
    /// Files written locally; 0 or 1 for a single-file download.
    pub files_written: u64,
    /// Local path the content landed at: the file itself for a file target,
    /// the subtree root for a directory target.
    pub destination_root: PathBuf,
    /// Recovered failures, ordered as traversal encountered them. Empty for
    /// a successful single-file download (its failures are fatal instead).
    pub failures: Vec<DownloadFailure>,
}

impl DownloadOutcome {
    pub fn status(&self) -> OutcomeStatus {
        if self.failures.is_empty() {
            OutcomeStatus::Complete
        } else if self.files_written > 0 {
            OutcomeStatus::Partial
        } else {
            OutcomeStatus::Failed
        }
    }
}
