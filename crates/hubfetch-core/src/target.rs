//! GitHub URL resolution into a canonical download target.
//!
//! Two URL families address the same repository content: the raw host
//! (`raw.githubusercontent.com`, always a file) and the browser host
//! (`github.com` with `blob`/`raw`/`tree` verbs). Both resolve into one
//! `Target` so everything downstream branches exactly once on `kind`.

use thiserror::Error;
use url::Url;

/// URL families this resolver understands, picked once per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostFamily {
    /// `raw.githubusercontent.com` — segments are `[owner, repo, ref, ...path]`.
    Raw,
    /// `github.com` — segments are `[owner, repo, verb, ref, ...path]`.
    Browser,
}

impl HostFamily {
    fn classify(host: &str) -> Option<Self> {
        match host {
            "raw.githubusercontent.com" => Some(HostFamily::Raw),
            "github.com" => Some(HostFamily::Browser),
            _ => None,
        }
    }
}

/// What a target addresses: one file or a directory subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

/// Resolved, canonical description of what to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub owner: String,
    pub repo: String,
    /// Branch name or commit-ish.
    pub git_ref: String,
    /// Slash-separated path within the repository; empty means the repo root.
    /// Never starts or ends with `/`.
    pub path: String,
    /// Leaf name used for the local destination. Never empty: falls back to
    /// the repo name when the path has no segments.
    pub display_name: String,
    pub kind: TargetKind,
}

/// Why a raw URL string could not be resolved. All variants are final; a
/// malformed or unrecognized URL is never retryable.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The input is not a well-formed absolute URL.
    #[error("not a valid URL: {0}")]
    Malformed(#[from] url::ParseError),
    /// Host is neither the raw-content host nor the browser host.
    #[error("unrecognized host {0:?}; expected github.com or raw.githubusercontent.com")]
    UnrecognizedHost(String),
    /// Too few path segments to name owner/repo/ref (and the verb on github.com).
    #[error("URL path {0:?} is too short for a GitHub file or folder link")]
    TooShort(String),
    /// github.com verb other than blob/raw/tree (e.g. `commits`, `releases`).
    #[error("unsupported github.com view {0:?}; expected blob, raw, or tree")]
    UnsupportedVerb(String),
}

/// Resolves a raw URL string into a [`Target`].
pub fn resolve(raw_url: &str) -> Result<Target, ResolveError> {
    let parsed = Url::parse(raw_url.trim())?;
    let host = parsed.host_str().unwrap_or_default();
    let family = HostFamily::classify(host)
        .ok_or_else(|| ResolveError::UnrecognizedHost(host.to_string()))?;

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();

    match family {
        HostFamily::Raw => resolve_raw(&segments, parsed.path()),
        HostFamily::Browser => resolve_browser(&segments, parsed.path()),
    }
}

/// `raw.githubusercontent.com/<owner>/<repo>/<ref>/<path...>` — always a file.
fn resolve_raw(segments: &[&str], url_path: &str) -> Result<Target, ResolveError> {
    let [owner, repo, git_ref, path_parts @ ..] = segments else {
        return Err(ResolveError::TooShort(url_path.to_string()));
    };
    if path_parts.is_empty() {
        return Err(ResolveError::TooShort(url_path.to_string()));
    }
    let path = path_parts.join("/");
    Ok(Target {
        owner: owner.to_string(),
        repo: repo.to_string(),
        git_ref: git_ref.to_string(),
        display_name: basename_or(&path, repo),
        path,
        kind: TargetKind::File,
    })
}

/// `github.com/<owner>/<repo>/<verb>/<ref>/<path...>` — `blob` and `raw` view
/// a file, `tree` views a directory (with an empty path meaning the repo root).
fn resolve_browser(segments: &[&str], url_path: &str) -> Result<Target, ResolveError> {
    let [owner, repo, verb, git_ref, path_parts @ ..] = segments else {
        return Err(ResolveError::TooShort(url_path.to_string()));
    };
    let path = path_parts.join("/");
    let (kind, display_name) = match *verb {
        "blob" | "raw" => (TargetKind::File, basename_or(&path, repo)),
        "tree" => {
            let name = path_parts
                .last()
                .map(|s| s.to_string())
                .unwrap_or_else(|| repo.to_string());
            (TargetKind::Directory, name)
        }
        other => return Err(ResolveError::UnsupportedVerb(other.to_string())),
    };
    Ok(Target {
        owner: owner.to_string(),
        repo: repo.to_string(),
        git_ref: git_ref.to_string(),
        path,
        display_name,
        kind,
    })
}

/// Last segment of a slash-separated path, or `fallback` when the path is empty.
fn basename_or(path: &str, fallback: &str) -> String {
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => fallback.to_string(),
    }
}
