//! Sort-ordering rules
//!
//! Sorting for object members, exports, and imports. When import hygiene
//! is enabled alongside, its ordering rules are authoritative and the
//! import-specific rules here are force-disabled so the two presets never
//! both claim import ordering.

use crate::options::ComposeOptions;
use nori_core::fragment::ConfigFragment;
use nori_core::rules::{RuleEntry, RuleMap, apply_overrides, rule_map};
use serde_json::json;

pub fn fragments(options: &ComposeOptions) -> Vec<ConfigFragment> {
    let mut rules = object_rules();
    rules.extend(export_rules());
    rules.extend(import_rules(options));
    rules.extend(ts_rules());
    apply_overrides(&mut rules, &options.sort.overrides());

    vec![ConfigFragment::rules(rules)]
}

fn object_rules() -> RuleMap {
    rule_map([
        ("sort/destructuring-properties", RuleEntry::error()),
        ("sort/object-properties", RuleEntry::off()),
    ])
}

fn export_rules() -> RuleMap {
    rule_map([
        (
            "sort/exports",
            RuleEntry::error_with([json!({
                "groups": [
                    { "type": "default", "order": 50 },
                    { "type": "sourceless", "order": 40 },
                    { "regex": "^\\.+\\/", "order": 30 },
                    { "type": "dependency", "order": 10 },
                    { "type": "other", "order": 20 }
                ]
            })]),
        ),
        ("sort/export-members", RuleEntry::error()),
    ])
}

fn import_rules(options: &ComposeOptions) -> RuleMap {
    if options.import.is_enabled() {
        rule_map([
            ("sort/imports", RuleEntry::off()),
            ("sort/import-members", RuleEntry::off()),
        ])
    } else {
        rule_map([
            (
                "sort/imports",
                RuleEntry::error_with([json!({
                    "groups": [
                        { "type": "side-effect", "order": 10 },
                        { "regex": "^\\.+\\/", "order": 40 },
                        { "type": "dependency", "order": 20 },
                        { "type": "other", "order": 30 }
                    ]
                })]),
            ),
            ("sort/import-members", RuleEntry::error()),
        ])
    }
}

fn ts_rules() -> RuleMap {
    rule_map([
        ("sort/type-properties", RuleEntry::off()),
        ("sort/string-enums", RuleEntry::off()),
        ("sort/string-unions", RuleEntry::off()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FeatureToggle;

    #[test]
    fn test_owns_import_ordering_when_alone() {
        let fragments = fragments(&ComposeOptions {
            sort: FeatureToggle::On,
            ..ComposeOptions::default()
        });
        assert!(!fragments[0].rules["sort/imports"].is_off());
        assert_eq!(fragments[0].rules["sort/import-members"], RuleEntry::error());
    }

    #[test]
    fn test_yields_import_ordering_to_import_preset() {
        let fragments = fragments(&ComposeOptions {
            sort: FeatureToggle::On,
            import: FeatureToggle::On,
            ..ComposeOptions::default()
        });
        assert!(fragments[0].rules["sort/imports"].is_off());
        assert!(fragments[0].rules["sort/import-members"].is_off());
    }

    #[test]
    fn test_overrides_win() {
        let fragments = fragments(&ComposeOptions {
            sort: FeatureToggle::Custom(rule_map([(
                "sort/object-properties",
                RuleEntry::error(),
            )])),
            ..ComposeOptions::default()
        });
        assert_eq!(
            fragments[0].rules["sort/object-properties"],
            RuleEntry::error()
        );
    }
}
