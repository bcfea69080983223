//! Traversal progress events for the embedding surface (CLI, notifications).
//!
//! The core pushes events into an optional channel instead of mutating a
//! shared status object; the final [`crate::outcome::DownloadOutcome`] is
//! still returned by value. Sends are best-effort: a dropped receiver never
//! fails a download.

use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// One traversal event.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// A file fetch is starting.
    FileStarted { remote_path: String },
    /// A file was fetched and written locally.
    FileWritten { remote_path: String, dest: PathBuf },
    /// A file fetch or write failed; recorded, traversal continues.
    FileFailed { remote_path: String, reason: String },
    /// A directory listing returned this many children.
    DirectoryListed { remote_path: String, entries: usize },
    /// A listing entry was skipped (symlink, submodule, unknown type).
    EntrySkipped { remote_path: String },
    /// The invocation finished and the outcome is about to be returned.
    Finished { files_written: u64, failures: usize },
}

/// Sends `event` when a sink is attached; send errors are ignored.
pub(crate) fn emit(progress: Option<&Sender<ProgressEvent>>, event: ProgressEvent) {
    if let Some(tx) = progress {
        let _ = tx.send(event);
    }
}
