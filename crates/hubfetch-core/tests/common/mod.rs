//! Scripted in-memory fetcher standing in for the gh transport.
//!
//! The core only sees the `ContentFetcher` trait, so tests describe a remote
//! tree as maps and mark individual paths as failing.

use std::collections::{HashMap, HashSet};

use hubfetch_core::fetcher::{ContentFetcher, EntryKind, FetchError, RemoteEntry};

pub fn file_entry(name: &str, path: &str) -> RemoteEntry {
    RemoteEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind: EntryKind::File,
        download_url: Some(format!("https://raw.example.com/{path}")),
    }
}

pub fn dir_entry(name: &str, path: &str) -> RemoteEntry {
    RemoteEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind: EntryKind::Dir,
        download_url: None,
    }
}

pub fn other_entry(name: &str, path: &str) -> RemoteEntry {
    RemoteEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind: EntryKind::Other,
        download_url: None,
    }
}

#[derive(Default)]
pub struct FakeFetcher {
    files: HashMap<String, Vec<u8>>,
    dirs: HashMap<String, Vec<RemoteEntry>>,
    failing: HashSet<String>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers file bytes at a remote path.
    pub fn file(mut self, path: &str, bytes: &[u8]) -> Self {
        self.files.insert(path.to_string(), bytes.to_vec());
        self
    }

    /// Registers a directory listing at a remote path.
    pub fn dir(mut self, path: &str, entries: Vec<RemoteEntry>) -> Self {
        self.dirs.insert(path.to_string(), entries);
        self
    }

    /// Marks a remote path (file or directory) as failing on access.
    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    fn check(&self, path: &str) -> Result<(), FetchError> {
        if self.failing.contains(path) {
            return Err(FetchError::Api {
                status: 1,
                stderr: format!("HTTP 500: injected failure for {path}"),
            });
        }
        Ok(())
    }
}

impl ContentFetcher for FakeFetcher {
    fn fetch_file(
        &self,
        _owner: &str,
        _repo: &str,
        _git_ref: &str,
        path: &str,
    ) -> Result<Vec<u8>, FetchError> {
        self.check(path)?;
        self.files.get(path).cloned().ok_or_else(|| FetchError::Api {
            status: 1,
            stderr: format!("HTTP 404: no such file {path}"),
        })
    }

    fn list_directory(
        &self,
        _owner: &str,
        _repo: &str,
        _git_ref: &str,
        path: &str,
    ) -> Result<Vec<RemoteEntry>, FetchError> {
        self.check(path)?;
        self.dirs.get(path).cloned().ok_or_else(|| FetchError::Api {
            status: 1,
            stderr: format!("HTTP 404: no such directory {path}"),
        })
    }
}
