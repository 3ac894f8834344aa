//! Import-hygiene rules
//!
//! Static-analysis, correctness, and ordering rules for module imports.
//! When typed-source support is enabled, a resolver-adjustment fragment is
//! emitted first so the scoped fragment's directives (and with them any
//! caller overrides) stay authoritative.

use crate::options::ComposeOptions;
use nori_core::fragment::{
    ConfigFragment, LanguageOptions, ParserKind, SourceType, glob_list,
};
use nori_core::rules::{RuleEntry, RuleMap, apply_overrides, rule_map};
use serde_json::json;

const IMPORT_FILES: &[&str] = &["**/*.{js,mjs,cjs,jsx,mjsx,ts,tsx,mtsx}"];

pub fn fragments(options: &ComposeOptions) -> Vec<ConfigFragment> {
    let mut fragments = Vec::new();

    if options.typescript.is_enabled() {
        fragments.push(typed_resolver_fragment());
    }

    let mut rules = recommended_rules();
    rules.extend(static_analysis_rules());
    rules.extend(helpful_rules());
    rules.extend(stylistic_rules());
    apply_overrides(&mut rules, &options.import.overrides());

    fragments.push(ConfigFragment {
        files: glob_list(IMPORT_FILES),
        ignores: vec!["eslint.config.js".to_string()],
        language_options: Some(LanguageOptions {
            parser: Some(ParserKind::Typescript),
            ecma_version: Some("latest".to_string()),
            source_type: Some(SourceType::Module),
            parser_options: None,
        }),
        rules,
        ..ConfigFragment::default()
    });

    fragments
}

/// Typed sources resolve through the type-aware resolver, which already
/// checks named exports itself.
fn typed_resolver_fragment() -> ConfigFragment {
    ConfigFragment {
        settings: Some(json!({ "import-x/resolver": { "typescript": true } })),
        rules: rule_map([("import-x/named", RuleEntry::off())]),
        ..ConfigFragment::default()
    }
}

fn recommended_rules() -> RuleMap {
    rule_map([
        ("import-x/no-unresolved", RuleEntry::error()),
        ("import-x/named", RuleEntry::error()),
        ("import-x/namespace", RuleEntry::error()),
        ("import-x/default", RuleEntry::error()),
        ("import-x/export", RuleEntry::error()),
        ("import-x/no-duplicates", RuleEntry::warn()),
    ])
}

fn static_analysis_rules() -> RuleMap {
    rule_map([
        ("import-x/no-named-default", RuleEntry::error()),
        ("import-x/no-absolute-path", RuleEntry::error()),
        ("import-x/no-webpack-loader-syntax", RuleEntry::error()),
        ("import-x/no-self-import", RuleEntry::error()),
        ("import-x/no-cycle", RuleEntry::error()),
        ("import-x/no-useless-path-segments", RuleEntry::error()),
        ("import-x/no-unused-modules", RuleEntry::error()),
    ])
}

fn helpful_rules() -> RuleMap {
    rule_map([
        ("import-x/no-named-as-default", RuleEntry::error()),
        // Too many false positives against namespace-style consumers.
        ("import-x/no-named-as-default-member", RuleEntry::off()),
        ("import-x/no-deprecated", RuleEntry::error()),
        ("import-x/no-extraneous-dependencies", RuleEntry::error()),
        ("import-x/no-mutable-exports", RuleEntry::error()),
    ])
}

fn stylistic_rules() -> RuleMap {
    rule_map([
        (
            "import-x/extensions",
            RuleEntry::error_with([json!({
                "js": "never",
                "json": "always",
                "svg": "always",
                "png": "always",
                "jpg": "always",
                "ico": "always",
                "graphql": "always",
                "css": "always",
                "sass": "always",
                "scss": "always",
                "less": "always",
                "styl": "always"
            })]),
        ),
        (
            "import-x/order",
            RuleEntry::error_with([json!({
                "groups": ["builtin", "external", "internal", "parent", "sibling"],
                "alphabetize": {
                    "order": "asc",
                    "orderImportKind": "asc",
                    "caseInsensitive": false
                },
                "newlines-between": "always"
            })]),
        ),
        ("import-x/newline-after-import", RuleEntry::error()),
        ("import-x/no-anonymous-default-export", RuleEntry::error()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FeatureToggle;

    #[test]
    fn test_scoped_fragment_shape() {
        let fragments = fragments(&ComposeOptions {
            import: FeatureToggle::On,
            ..ComposeOptions::default()
        });
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].files, glob_list(IMPORT_FILES));
        assert_eq!(fragments[0].ignores, vec!["eslint.config.js"]);
        assert_eq!(fragments[0].rules["import-x/no-cycle"], RuleEntry::error());
    }

    #[test]
    fn test_typed_resolver_fragment_comes_first() {
        let fragments = fragments(&ComposeOptions {
            import: FeatureToggle::On,
            typescript: FeatureToggle::On,
            ..ComposeOptions::default()
        });
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].rules["import-x/named"].is_off());
        assert!(fragments[0].settings.is_some());
        // The scoped fragment re-enables the rule later in the sequence.
        assert_eq!(fragments[1].rules["import-x/named"], RuleEntry::error());
    }

    #[test]
    fn test_overrides_win() {
        let fragments = fragments(&ComposeOptions {
            import: FeatureToggle::Custom(rule_map([(
                "import-x/no-cycle",
                RuleEntry::off(),
            )])),
            ..ComposeOptions::default()
        });
        assert!(fragments.last().unwrap().rules["import-x/no-cycle"].is_off());
    }
}
