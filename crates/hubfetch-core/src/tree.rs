//! Recursive directory-tree download.
//!
//! Depth-first walk over the remote listing, in listing order. Per-file and
//! per-subdirectory failures are recorded and traversal continues; only a
//! failure to list the root directory (or to create the local root) is
//! fatal. `Other` entries (symlinks, submodules, unknown types) are skipped
//! silently: not written, not counted, not recorded.

use std::path::Path;
use std::sync::mpsc::Sender;

use crate::cancel::{self, CancelFlag};
use crate::error::DownloadError;
use crate::fetcher::{ContentFetcher, EntryKind, FetchError};
use crate::materialize;
use crate::outcome::{DownloadFailure, DownloadOutcome};
use crate::progress::{emit, ProgressEvent};
use crate::target::{Target, TargetKind};

/// Running totals for one subtree. Each recursive call returns its own tally
/// and the caller merges; nothing is mutated across branches.
#[derive(Debug, Default)]
struct SubtreeTally {
    files_written: u64,
    failures: Vec<DownloadFailure>,
}

impl SubtreeTally {
    fn merge(&mut self, other: SubtreeTally) {
        self.files_written += other.files_written;
        self.failures.extend(other.failures);
    }
}

/// Why a subtree walk stopped early.
enum WalkAbort {
    /// Listing this directory failed. The parent records it as a failure for
    /// the subdirectory path; at the invocation root it is fatal.
    List(FetchError),
    /// Cancellation was requested; unwinds the whole traversal.
    Cancelled,
}

/// Downloads the directory subtree addressed by `target` into `dest_root`.
///
/// `dest_root` is the local directory the subtree's entries land in (the
/// orchestrator has already appended the target's display name). Returns the
/// aggregated outcome; a root listing failure or an unwritable root is fatal
/// and produces no partial outcome.
pub fn download_tree<F: ContentFetcher>(
    fetcher: &F,
    target: &Target,
    dest_root: &Path,
    progress: Option<&Sender<ProgressEvent>>,
    cancel: Option<&CancelFlag>,
) -> Result<DownloadOutcome, DownloadError> {
    debug_assert_eq!(target.kind, TargetKind::Directory);
    materialize::ensure_dir(dest_root)?;

    match walk_dir(fetcher, target, &target.path, dest_root, progress, cancel) {
        Ok(tally) => {
            tracing::info!(
                files = tally.files_written,
                failures = tally.failures.len(),
                dest = %dest_root.display(),
                "tree download finished"
            );
            Ok(DownloadOutcome {
                kind: TargetKind::Directory,
                files_written: tally.files_written,
                destination_root: dest_root.to_path_buf(),
                failures: tally.failures,
            })
        }
        Err(WalkAbort::List(e)) => Err(DownloadError::Remote(e)),
        Err(WalkAbort::Cancelled) => Err(DownloadError::Cancelled),
    }
}

/// Lists `remote_path` and processes its entries in listing order, recursing
/// into subdirectories.
fn walk_dir<F: ContentFetcher>(
    fetcher: &F,
    target: &Target,
    remote_path: &str,
    local_dir: &Path,
    progress: Option<&Sender<ProgressEvent>>,
    cancel: Option<&CancelFlag>,
) -> Result<SubtreeTally, WalkAbort> {
    if cancel::is_cancelled(cancel) {
        return Err(WalkAbort::Cancelled);
    }
    let entries = fetcher
        .list_directory(&target.owner, &target.repo, &target.git_ref, remote_path)
        .map_err(WalkAbort::List)?;
    emit(
        progress,
        ProgressEvent::DirectoryListed {
            remote_path: remote_path.to_string(),
            entries: entries.len(),
        },
    );

    let mut tally = SubtreeTally::default();
    for entry in entries {
        match entry.kind {
            EntryKind::File => {
                if cancel::is_cancelled(cancel) {
                    return Err(WalkAbort::Cancelled);
                }
                let dest = local_dir.join(materialize::local_name(&entry.name));
                emit(
                    progress,
                    ProgressEvent::FileStarted {
                        remote_path: entry.path.clone(),
                    },
                );
                match fetch_and_write(fetcher, target, &entry.path, &dest) {
                    Ok(()) => {
                        tally.files_written += 1;
                        emit(
                            progress,
                            ProgressEvent::FileWritten {
                                remote_path: entry.path,
                                dest,
                            },
                        );
                    }
                    Err(reason) => {
                        tracing::warn!(path = %entry.path, %reason, "file failed");
                        emit(
                            progress,
                            ProgressEvent::FileFailed {
                                remote_path: entry.path.clone(),
                                reason: reason.clone(),
                            },
                        );
                        tally.failures.push(DownloadFailure {
                            remote_path: entry.path,
                            reason,
                        });
                    }
                }
            }
            EntryKind::Dir => {
                let sub_dir = local_dir.join(materialize::local_name(&entry.name));
                if let Err(e) = materialize::ensure_dir(&sub_dir) {
                    tracing::warn!(path = %entry.path, error = %e, "subdirectory create failed");
                    tally.failures.push(DownloadFailure {
                        remote_path: entry.path,
                        reason: e.to_string(),
                    });
                    continue;
                }
                match walk_dir(fetcher, target, &entry.path, &sub_dir, progress, cancel) {
                    Ok(sub_tally) => tally.merge(sub_tally),
                    // A subdirectory that fails to list is skipped whole; its
                    // siblings still get processed.
                    Err(WalkAbort::List(e)) => {
                        tracing::warn!(path = %entry.path, error = %e, "subdirectory listing failed");
                        tally.failures.push(DownloadFailure {
                            remote_path: entry.path,
                            reason: e.to_string(),
                        });
                    }
                    Err(WalkAbort::Cancelled) => return Err(WalkAbort::Cancelled),
                }
            }
            EntryKind::Other => {
                emit(
                    progress,
                    ProgressEvent::EntrySkipped {
                        remote_path: entry.path,
                    },
                );
            }
        }
    }
    Ok(tally)
}

/// Fetches one file and writes it to `dest`. Both failure modes collapse to
/// a reason string: at this depth they are recorded, not propagated.
fn fetch_and_write<F: ContentFetcher>(
    fetcher: &F,
    target: &Target,
    remote_path: &str,
    dest: &Path,
) -> Result<(), String> {
    let bytes = fetcher
        .fetch_file(&target.owner, &target.repo, &target.git_ref, remote_path)
        .map_err(|e| e.to_string())?;
    materialize::write_file(dest, &bytes).map_err(|e| e.to_string())
}
