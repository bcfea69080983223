//! Error taxonomy for one download invocation.
//!
//! Three classes, matching how failures propagate: a bad URL is final and
//! surfaced immediately; a remote failure at the invocation root is fatal
//! (per-entry remote failures inside a tree are recorded in the outcome
//! instead); a local IO failure writing the single-file destination or the
//! tree root is fatal.

use thiserror::Error;

use crate::fetcher::FetchError;
use crate::target::ResolveError;

/// Fatal failure of a whole invocation. Recovered per-entry failures never
/// surface here; they end up in [`crate::outcome::DownloadOutcome::failures`].
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] ResolveError),
    #[error("remote: {0}")]
    Remote(#[from] FetchError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("download cancelled")]
    Cancelled,
}
