//! Top-level download entry point.
//!
//! Resolves the raw URL, then branches once: a single file is all-or-nothing,
//! a directory delegates to the tree walk and tolerates per-entry failures.
//! A final `Finished` event fires after the outcome is built, so embedding
//! surfaces can notify (sound, toast) without the core knowing about them.

use std::path::Path;
use std::sync::mpsc::Sender;

use crate::cancel::{self, CancelFlag};
use crate::error::DownloadError;
use crate::fetcher::ContentFetcher;
use crate::materialize;
use crate::outcome::DownloadOutcome;
use crate::progress::{emit, ProgressEvent};
use crate::target::{self, TargetKind};
use crate::tree;

/// Resolves `raw_url` and downloads it under `dest_root`.
///
/// File target: written to `<dest_root>/<display_name>`. Directory target:
/// mirrored under `<dest_root>/<display_name>/...`.
pub fn run<F: ContentFetcher>(
    fetcher: &F,
    raw_url: &str,
    dest_root: &Path,
    progress: Option<&Sender<ProgressEvent>>,
    cancel: Option<&CancelFlag>,
) -> Result<DownloadOutcome, DownloadError> {
    let target = target::resolve(raw_url)?;
    tracing::info!(
        owner = %target.owner,
        repo = %target.repo,
        git_ref = %target.git_ref,
        path = %target.path,
        kind = ?target.kind,
        "resolved target"
    );

    let dest = dest_root.join(materialize::local_name(&target.display_name));
    let outcome = match target.kind {
        TargetKind::File => {
            if cancel::is_cancelled(cancel) {
                return Err(DownloadError::Cancelled);
            }
            emit(
                progress,
                ProgressEvent::FileStarted {
                    remote_path: target.path.clone(),
                },
            );
            let bytes =
                fetcher.fetch_file(&target.owner, &target.repo, &target.git_ref, &target.path)?;
            materialize::write_file(&dest, &bytes)?;
            emit(
                progress,
                ProgressEvent::FileWritten {
                    remote_path: target.path.clone(),
                    dest: dest.clone(),
                },
            );
            DownloadOutcome {
                kind: TargetKind::File,
                files_written: 1,
                destination_root: dest,
                failures: Vec::new(),
            }
        }
        TargetKind::Directory => tree::download_tree(fetcher, &target, &dest, progress, cancel)?,
    };

    emit(
        progress,
        ProgressEvent::Finished {
            files_written: outcome.files_written,
            failures: outcome.failures.len(),
        },
    );
    Ok(outcome)
}
