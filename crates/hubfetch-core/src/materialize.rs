//! Local filesystem writes.
//!
//! Every download is a fresh overwrite: missing ancestors are created on
//! demand and an existing file at the destination is truncated. Remote entry
//! names are sanitized before they become local names.

use std::fs;
use std::io;
use std::path::Path;

/// Fallback local name for a remote name that sanitizes to nothing.
const FALLBACK_NAME: &str = "unnamed";

/// Writes `bytes` to `dest`, creating missing ancestor directories and
/// overwriting any pre-existing file at that path.
pub fn write_file(dest: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, bytes)
}

/// Creates `dir` and any missing ancestors.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Sanitizes a remote entry name for use as a local file or directory name.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Trims leading/trailing spaces, dots, and underscores
/// - Collapses consecutive underscores
/// - Limits length to 255 bytes (Linux NAME_MAX)
///
/// Names that sanitize to nothing (or to `.`/`..`) become `unnamed`.
pub fn local_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for c in name.chars() {
        let replacement = if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            '_'
        } else {
            c
        };
        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.' || c == '_');
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return FALLBACK_NAME.to_string();
    }

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parents_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a/b/c.txt");
        write_file(&dest, b"content").unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"content");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("f.txt");
        write_file(&dest, b"first version, longer").unwrap();
        write_file(&dest, b"second").unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"second");
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("x/y");
        ensure_dir(&sub).unwrap();
        ensure_dir(&sub).unwrap();
        assert!(sub.is_dir());
    }

    #[test]
    fn local_name_passes_normal_names_through() {
        assert_eq!(local_name("README.md"), "README.md");
        assert_eq!(local_name("my file.txt"), "my file.txt");
    }

    #[test]
    fn local_name_replaces_separators_and_controls() {
        assert_eq!(local_name("a/b\\c.txt"), "a_b_c.txt");
        assert_eq!(local_name("file\x00name"), "file_name");
    }

    #[test]
    fn local_name_falls_back_for_unusable_names() {
        assert_eq!(local_name(""), "unnamed");
        assert_eq!(local_name(".."), "unnamed");
        assert_eq!(local_name("..."), "unnamed");
    }
}
