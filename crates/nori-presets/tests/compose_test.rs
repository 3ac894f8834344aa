//! End-to-end composition tests

use nori_presets::{
    ComposeOptions, ConfigFragment, FeatureToggle, GitignoreDiscovery, IgnoreOptions, NoriError,
    ParserKind, RuleEntry, compose, rule_map,
};
use std::fs;
use tempfile::TempDir;

/// Options with every optional feature off and no filesystem discovery.
fn minimal_options() -> ComposeOptions {
    ComposeOptions {
        ignores: Some(IgnoreOptions {
            globs: vec!["**/generated".to_string()],
            gitignore: GitignoreDiscovery::Disabled,
        }),
        ..ComposeOptions::default()
    }
}

#[test]
fn test_minimal_compose_is_ignores_then_base() {
    let config = compose(&minimal_options(), vec![]).unwrap();

    assert_eq!(config.len(), 2);
    assert!(config[0].rules.is_empty());
    assert!(config[0].ignores.contains(&"**/node_modules".to_string()));
    assert_eq!(config[0].ignores.last().unwrap(), "**/generated");
    assert!(!config[1].rules.is_empty());
    assert!(config[1].files.contains(&"**/*.js".to_string()));
}

#[test]
fn test_typescript_appends_typed_fragment_after_base() {
    let options = ComposeOptions {
        typescript: FeatureToggle::On,
        ..minimal_options()
    };
    let config = compose(&options, vec![]).unwrap();

    assert_eq!(config.len(), 3);
    let typed = &config[2];
    assert_eq!(typed.files, vec!["**/*.ts", "**/*.cts", "**/*.mts", "**/*.tsx"]);
    assert_eq!(
        typed.language_options.as_ref().unwrap().parser,
        Some(ParserKind::Typescript)
    );
    // Paired replacement: the disable never appears without its equivalent.
    assert!(typed.rules["no-shadow"].is_off());
    assert!(typed.rules.contains_key("@typescript-eslint/no-shadow"));
}

#[test]
fn test_override_wins_over_builtin_default() {
    let options = ComposeOptions {
        jsdoc: FeatureToggle::Custom(rule_map([("jsdoc/tag-lines", RuleEntry::off())])),
        ..minimal_options()
    };
    let config = compose(&options, vec![]).unwrap();

    assert_eq!(config.len(), 3);
    assert!(config[2].rules["jsdoc/tag-lines"].is_off());
}

#[test]
fn test_prettier_fragment_is_last_despite_custom_fragments() {
    let options = ComposeOptions {
        sort: FeatureToggle::On,
        stylistic: FeatureToggle::On,
        prettier: FeatureToggle::On,
        ..minimal_options()
    };
    let custom = ConfigFragment::rules(rule_map([("no-console", RuleEntry::off())]));
    let config = compose(&options, vec![custom.clone()]).unwrap();

    let last = config.last().unwrap();
    assert_eq!(last.rules["prettier/prettier"], RuleEntry::error());
    // The custom fragment sits immediately before it, verbatim.
    assert_eq!(config[config.len() - 2], custom);
}

#[test]
fn test_sort_yields_import_rules_to_import_preset() {
    let options = ComposeOptions {
        import: FeatureToggle::On,
        sort: FeatureToggle::On,
        ..minimal_options()
    };
    let config = compose(&options, vec![]).unwrap();

    let sort_fragment = config
        .iter()
        .find(|fragment| fragment.rules.contains_key("sort/exports"))
        .unwrap();
    assert!(sort_fragment.rules["sort/imports"].is_off());
    assert!(sort_fragment.rules["sort/import-members"].is_off());
}

#[test]
fn test_compose_is_idempotent() {
    let options = ComposeOptions {
        library: true,
        typescript: FeatureToggle::On,
        jsdoc: FeatureToggle::On,
        import: FeatureToggle::On,
        promise: FeatureToggle::On,
        sort: FeatureToggle::On,
        stylistic: FeatureToggle::On,
        prettier: FeatureToggle::On,
        ..minimal_options()
    };

    let first = compose(&options, vec![]).unwrap();
    let second = compose(&options, vec![]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_ignore_file_fails_before_any_fragment() {
    let temp_dir = TempDir::new().unwrap();
    let options = ComposeOptions {
        ignores: Some(IgnoreOptions {
            globs: vec![],
            gitignore: GitignoreDiscovery::From(temp_dir.path().to_path_buf()),
        }),
        ..ComposeOptions::default()
    };

    let err = compose(&options, vec![]).unwrap_err();
    assert!(matches!(err, NoriError::MissingIgnoreFile { .. }));
}

#[test]
fn test_discovered_ignore_file_leads_the_sequence() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".gitignore"),
        "# build artifacts\ndist/\n*.tsbuildinfo\n",
    )
    .unwrap();
    let nested = temp_dir.path().join("packages").join("app");
    fs::create_dir_all(&nested).unwrap();

    let options = ComposeOptions {
        ignores: Some(IgnoreOptions {
            globs: vec![],
            gitignore: GitignoreDiscovery::From(nested),
        }),
        ..ComposeOptions::default()
    };
    let config = compose(&options, vec![]).unwrap();

    assert_eq!(config.len(), 3);
    assert_eq!(config[0].ignores, vec!["dist/**", "*.tsbuildinfo"]);
    assert!(config[1].ignores.contains(&"**/dist".to_string()));
    assert!(!config[2].rules.is_empty());
}

#[test]
fn test_enabled_presets_keep_declaration_order() {
    let options = ComposeOptions {
        jsdoc: FeatureToggle::On,
        promise: FeatureToggle::On,
        ..minimal_options()
    };
    let config = compose(&options, vec![]).unwrap();

    assert_eq!(config.len(), 4);
    assert!(config[2].rules.contains_key("jsdoc/check-alignment"));
    assert!(config[3].rules.contains_key("promise/catch-or-return"));
}

#[test]
fn test_serialized_config_round_trips() {
    let options = ComposeOptions {
        typescript: FeatureToggle::On,
        prettier: FeatureToggle::On,
        ..minimal_options()
    };
    let config = compose(&options, vec![]).unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Vec<ConfigFragment> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
