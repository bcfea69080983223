//! Content fetching through the authenticated `gh` CLI.
//!
//! `gh api /repos/{owner}/{repo}/contents/{path}?ref={ref}` answers with a
//! JSON object for a file (body base64-encoded) or a JSON array for a
//! directory listing. Authentication, redirects, and rate limits are gh's
//! concern; this fetcher only shells out and decodes.

use std::path::PathBuf;
use std::process::Command;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use super::{ContentFetcher, FetchError, RemoteEntry};

/// File payload from the Contents API (object form).
#[derive(Debug, Deserialize)]
struct FilePayload {
    content: Option<String>,
    encoding: Option<String>,
}

/// Fetcher that shells out to the GitHub CLI.
pub struct GhCliFetcher {
    gh_bin: PathBuf,
}

impl GhCliFetcher {
    /// Uses an explicit gh binary path (config override).
    pub fn with_binary(gh_bin: PathBuf) -> Self {
        Self { gh_bin }
    }

    /// Locates `gh` on PATH.
    pub fn discover() -> Result<Self, FetchError> {
        let gh_bin = which::which("gh")?;
        tracing::debug!(gh = %gh_bin.display(), "found gh binary");
        Ok(Self { gh_bin })
    }

    /// Runs `gh api <api_path>` and returns stdout on success.
    fn api(&self, api_path: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(api_path, "gh api");
        let output = Command::new(&self.gh_bin)
            .arg("api")
            .arg(api_path)
            .output()
            .map_err(FetchError::Spawn)?;
        if !output.status.success() {
            return Err(FetchError::Api {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

impl ContentFetcher for GhCliFetcher {
    fn fetch_file(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        path: &str,
    ) -> Result<Vec<u8>, FetchError> {
        let body = self.api(&contents_api_path(owner, repo, git_ref, path))?;
        decode_file_payload(&body, path)
    }

    fn list_directory(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        path: &str,
    ) -> Result<Vec<RemoteEntry>, FetchError> {
        let body = self.api(&contents_api_path(owner, repo, git_ref, path))?;
        decode_listing(&body, path)
    }
}

/// Contents API path for the given coordinates. An empty repository path
/// addresses the repo root.
fn contents_api_path(owner: &str, repo: &str, git_ref: &str, path: &str) -> String {
    if path.is_empty() {
        format!("/repos/{owner}/{repo}/contents?ref={git_ref}")
    } else {
        format!("/repos/{owner}/{repo}/contents/{path}?ref={git_ref}")
    }
}

/// Decodes the object form of a Contents API response into raw file bytes.
fn decode_file_payload(body: &[u8], path: &str) -> Result<Vec<u8>, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if value.is_array() {
        // The path addresses a directory; the caller asked for a file.
        return Err(FetchError::IsDirectory {
            path: path.to_string(),
        });
    }
    let payload: FilePayload = serde_json::from_value(value)?;
    match payload.encoding.as_deref() {
        Some("base64") => {}
        other => return Err(FetchError::Encoding(other.unwrap_or("none").to_string())),
    }
    // The API wraps base64 bodies at 60 columns; strip the line breaks.
    let compact: String = payload
        .content
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    Ok(STANDARD.decode(compact.as_bytes())?)
}

/// Decodes the array form of a Contents API response into listing entries.
fn decode_listing(body: &[u8], path: &str) -> Result<Vec<RemoteEntry>, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_array() {
        return Err(FetchError::IsFile {
            path: path.to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}
