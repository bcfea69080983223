//! Boundary to the hosting provider's content API.
//!
//! The download core only depends on the [`ContentFetcher`] trait and does
//! not know how bytes actually move; the production transport (the
//! authenticated `gh` CLI) lives in [`gh_cli`]. Tests substitute a scripted
//! fetcher, so exercising the tree walk needs no network or subprocess.

mod gh_cli;

pub use gh_cli::GhCliFetcher;

use serde::Deserialize;
use thiserror::Error;

/// One child item returned by a directory listing (Contents API shape).
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntry {
    /// Leaf name of the entry.
    pub name: String,
    /// Full path of the entry relative to the repository root.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Direct download URL for files. Unused: the core always goes back
    /// through [`ContentFetcher::fetch_file`].
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Listing entry classification. Symlinks, submodules, and any type the API
/// grows later deserialize to `Other`; the tree walk skips those silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    #[serde(other)]
    Other,
}

/// Failure reported by the content collaborator (transport, auth, not-found,
/// or an unusable payload). Not retried by the core.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("gh binary not found on PATH; install the GitHub CLI or set gh_bin in config")]
    GhNotFound(#[from] which::Error),
    #[error("failed to run gh: {0}")]
    Spawn(std::io::Error),
    #[error("gh api exited with status {status}: {stderr}")]
    Api { status: i32, stderr: String },
    #[error("unexpected gh api response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("file content has encoding {0:?}, expected base64")]
    Encoding(String),
    #[error("file content is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("{path:?} is a directory, not a file")]
    IsDirectory { path: String },
    #[error("{path:?} is a file, not a directory")]
    IsFile { path: String },
}

/// Narrow interface the download core requires from the hosting provider.
pub trait ContentFetcher {
    /// Decoded byte content of the file at the given coordinates.
    fn fetch_file(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        path: &str,
    ) -> Result<Vec<u8>, FetchError>;

    /// Immediate children of the given directory, one level deep, in the
    /// order the provider lists them.
    fn list_directory(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        path: &str,
    ) -> Result<Vec<RemoteEntry>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_kind_deserializes_known_types() {
        let entry: RemoteEntry =
            serde_json::from_str(r#"{"name":"a.txt","path":"d/a.txt","type":"file"}"#).unwrap();
        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.download_url, None);

        let entry: RemoteEntry =
            serde_json::from_str(r#"{"name":"sub","path":"d/sub","type":"dir"}"#).unwrap();
        assert_eq!(entry.kind, EntryKind::Dir);
    }

    #[test]
    fn entry_kind_unknown_types_fold_to_other() {
        for ty in ["symlink", "submodule", "something-new"] {
            let json = format!(r#"{{"name":"x","path":"x","type":"{ty}"}}"#);
            let entry: RemoteEntry = serde_json::from_str(&json).unwrap();
            assert_eq!(entry.kind, EntryKind::Other, "type {ty:?} should be Other");
        }
    }

    #[test]
    fn entry_keeps_download_url_when_present() {
        let entry: RemoteEntry = serde_json::from_str(
            r#"{"name":"a","path":"a","type":"file","download_url":"https://example.com/a"}"#,
        )
        .unwrap();
        assert_eq!(entry.download_url.as_deref(), Some("https://example.com/a"));
    }
}
