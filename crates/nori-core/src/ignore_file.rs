//! Ignore-file discovery and parsing
//!
//! Discovers the nearest ignore file by traversing upward from a starting
//! directory, and parses its newline-separated glob entries (`#`-prefixed
//! comments) into patterns the consuming engine understands.

use crate::error::{NoriError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name searched for during upward discovery
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Find the nearest file named `file_name` walking upward from `start_dir`.
///
/// Starts from the given directory and moves up the directory tree until
/// the file is found or the filesystem root is reached.
pub fn find_up(file_name: &str, start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current = start_dir
        .canonicalize()
        .map_err(|e| NoriError::config_error(format!(
            "Invalid search directory '{}': {e}",
            start_dir.display()
        )))?;

    loop {
        let candidate = current.join(file_name);
        if candidate.is_file() {
            debug!("Found ignore file: {}", candidate.display());
            return Ok(Some(candidate));
        }

        if let Some(parent) = current.parent() {
            current = parent.to_path_buf();
        } else {
            // Reached filesystem root
            break;
        }
    }

    Ok(None)
}

/// Read an ignore file and return its entries as engine glob patterns.
///
/// Blank lines and `#` comments are skipped, entries are normalized via
/// [`normalize_line`], duplicates are dropped, and entries that do not
/// compile as glob patterns are skipped with a warning.
pub fn load_patterns(path: &Path) -> Result<Vec<String>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| NoriError::io_error(path, e))?;

    let mut patterns = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let pattern = normalize_line(line);
        if Pattern::new(&pattern).is_err() {
            warn!(
                "Skipping unparsable ignore entry '{line}' in {}",
                path.display()
            );
            continue;
        }
        if !patterns.contains(&pattern) {
            patterns.push(pattern);
        }
    }

    debug!("Loaded {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}

/// Convert a gitignore-style entry into a glob pattern.
///
/// Directory entries ("temp/") become "temp/**"; bare names without glob
/// metacharacters ("file.txt") become "**/file.txt"; everything else is
/// already a glob and passes through unchanged.
fn normalize_line(line: &str) -> String {
    if line.ends_with('/') {
        format!("{line}**")
    } else if !line.contains('*') && !line.contains('?') {
        if line.contains('/') {
            line.to_string()
        } else {
            format!("**/{line}")
        }
    } else {
        line.to_string()
    }
}
