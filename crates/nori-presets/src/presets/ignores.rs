//! Ignore fragments: the discovered ignore file plus default excludes
//!
//! Exclusions must take effect before any rule fragment is evaluated, so
//! the composer always places these fragments first: the discovered-file
//! fragment (when discovery is on), then the default/explicit union.

use crate::options::ComposeOptions;
use nori_core::error::{NoriError, Result};
use nori_core::fragment::ConfigFragment;
use nori_core::ignore_file::{self, IGNORE_FILE_NAME};

/// Exclude globs applied regardless of any discovered ignore file
const DEFAULT_IGNORES: &[&str] = &[
    "**/node_modules",
    "**/dist",
    "**/output",
    "**/coverage",
    "**/.out",
    "**/.output",
    "**/.cache",
    "**/tmp",
    "**/.tmp",
    "**/.vite",
];

pub fn fragments(options: &ComposeOptions) -> Result<Vec<ConfigFragment>> {
    let ignores = options.ignores.clone().unwrap_or_default();
    let mut fragments = Vec::new();

    if let Some(start_dir) = ignores.gitignore.start_dir() {
        // Missing file is fatal: silently proceeding without it risks
        // linting generated or vendored output.
        let path = ignore_file::find_up(IGNORE_FILE_NAME, &start_dir)?
            .ok_or(NoriError::MissingIgnoreFile { start_dir })?;
        fragments.push(ConfigFragment::global_ignores(ignore_file::load_patterns(
            &path,
        )?));
    }

    let mut excludes: Vec<String> = DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect();
    for glob in &ignores.globs {
        if !excludes.contains(glob) {
            excludes.push(glob.clone());
        }
    }
    fragments.push(ConfigFragment::global_ignores(excludes));

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{GitignoreDiscovery, IgnoreOptions};
    use std::fs;
    use tempfile::TempDir;

    fn options_with(ignores: IgnoreOptions) -> ComposeOptions {
        ComposeOptions {
            ignores: Some(ignores),
            ..ComposeOptions::default()
        }
    }

    #[test]
    fn test_defaults_unioned_with_explicit_globs() {
        let options = options_with(IgnoreOptions {
            globs: vec!["**/generated".to_string(), "**/dist".to_string()],
            gitignore: GitignoreDiscovery::Disabled,
        });

        let fragments = fragments(&options).unwrap();
        assert_eq!(fragments.len(), 1);

        let excludes = &fragments[0].ignores;
        assert_eq!(excludes.len(), DEFAULT_IGNORES.len() + 1);
        assert!(excludes.contains(&"**/generated".to_string()));
        assert_eq!(
            excludes.iter().filter(|g| *g == "**/dist").count(),
            1,
            "explicit glob duplicating a default is dropped"
        );
    }

    #[test]
    fn test_discovered_fragment_precedes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".gitignore"), "dist/\n*.log\n").unwrap();

        let options = options_with(IgnoreOptions {
            globs: vec![],
            gitignore: GitignoreDiscovery::From(temp_dir.path().to_path_buf()),
        });

        let fragments = fragments(&options).unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].ignores, vec!["dist/**", "*.log"]);
        assert!(fragments[1].ignores.contains(&"**/node_modules".to_string()));
    }

    #[test]
    fn test_missing_ignore_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_with(IgnoreOptions {
            globs: vec![],
            gitignore: GitignoreDiscovery::From(temp_dir.path().to_path_buf()),
        });

        let err = fragments(&options).unwrap_err();
        assert!(matches!(err, NoriError::MissingIgnoreFile { .. }));
    }
}
