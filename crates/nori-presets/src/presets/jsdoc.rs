//! Documentation-comment rules
//!
//! Builds on the documentation plugin's recommended error-level baseline.
//! Typed sources get the variant that leaves type information to the
//! compiler; library mode makes documentation mandatory for externally
//! visible members.

use crate::options::ComposeOptions;
use nori_core::fragment::ConfigFragment;
use nori_core::rules::{RuleEntry, RuleMap, apply_overrides, rule_map};
use serde_json::json;

pub fn fragments(options: &ComposeOptions) -> Vec<ConfigFragment> {
    let mut rules = recommended_rules(options.typescript.is_enabled());
    rules.extend(adjustment_rules(options));
    apply_overrides(&mut rules, &options.jsdoc.overrides());

    vec![ConfigFragment::rules(rules)]
}

fn recommended_rules(typescript: bool) -> RuleMap {
    let mut rules = rule_map([
        ("jsdoc/check-access", RuleEntry::error()),
        ("jsdoc/check-alignment", RuleEntry::error()),
        ("jsdoc/check-param-names", RuleEntry::error()),
        ("jsdoc/check-property-names", RuleEntry::error()),
        ("jsdoc/check-tag-names", RuleEntry::error()),
        ("jsdoc/check-values", RuleEntry::error()),
        ("jsdoc/empty-tags", RuleEntry::error()),
        ("jsdoc/implements-on-classes", RuleEntry::error()),
        ("jsdoc/multiline-blocks", RuleEntry::error()),
        ("jsdoc/no-multi-asterisks", RuleEntry::error()),
        ("jsdoc/require-jsdoc", RuleEntry::error()),
        ("jsdoc/require-param", RuleEntry::error()),
        ("jsdoc/require-param-description", RuleEntry::error()),
        ("jsdoc/require-param-name", RuleEntry::error()),
        ("jsdoc/require-property", RuleEntry::error()),
        ("jsdoc/require-property-description", RuleEntry::error()),
        ("jsdoc/require-property-name", RuleEntry::error()),
        ("jsdoc/require-returns", RuleEntry::error()),
        ("jsdoc/require-returns-check", RuleEntry::error()),
        ("jsdoc/require-returns-description", RuleEntry::error()),
        ("jsdoc/require-yields", RuleEntry::error()),
        ("jsdoc/require-yields-check", RuleEntry::error()),
        ("jsdoc/tag-lines", RuleEntry::error()),
        ("jsdoc/valid-types", RuleEntry::error()),
    ]);

    if typescript {
        // Type information lives in annotations, not comments.
        rules.extend(rule_map([
            ("jsdoc/no-types", RuleEntry::error()),
            ("jsdoc/no-undefined-types", RuleEntry::off()),
            ("jsdoc/require-param-type", RuleEntry::off()),
            ("jsdoc/require-property-type", RuleEntry::off()),
            ("jsdoc/require-returns-type", RuleEntry::off()),
        ]));
    } else {
        rules.extend(rule_map([
            ("jsdoc/check-types", RuleEntry::error()),
            ("jsdoc/no-undefined-types", RuleEntry::error()),
            ("jsdoc/require-param-type", RuleEntry::error()),
            ("jsdoc/require-property-type", RuleEntry::error()),
            ("jsdoc/require-returns-type", RuleEntry::error()),
        ]));
    }

    rules
}

fn adjustment_rules(options: &ComposeOptions) -> RuleMap {
    rule_map([
        // The core rule of the same concern stays off either way.
        ("require-jsdoc", RuleEntry::off()),
        (
            "jsdoc/require-description-complete-sentence",
            RuleEntry::error(),
        ),
        (
            "jsdoc/require-hyphen-before-param-description",
            RuleEntry::error_with([json!("always"), json!({ "tags": { "*": "always" } })]),
        ),
        (
            "jsdoc/require-jsdoc",
            if options.library {
                RuleEntry::error_with([json!({ "publicOnly": true })])
            } else {
                RuleEntry::off()
            },
        ),
        (
            "jsdoc/tag-lines",
            RuleEntry::error_with([json!("always"), json!({ "count": 0, "startLines": 1 })]),
        ),
        (
            "jsdoc/require-param",
            RuleEntry::error_with([json!({ "checkDestructuredRoots": false })]),
        ),
        (
            "jsdoc/check-param-names",
            RuleEntry::error_with([json!({ "checkDestructured": false })]),
        ),
    ])
}
