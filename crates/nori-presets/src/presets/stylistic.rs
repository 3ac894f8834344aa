//! Stylistic-formatting rules
//!
//! The dedicated formatting plugin's recommended baseline. Kept separate
//! from the base stylistic defaults so callers can adopt the plugin's
//! conventions wholesale or not at all.

use crate::options::ComposeOptions;
use nori_core::fragment::ConfigFragment;
use nori_core::rules::{RuleEntry, RuleMap, apply_overrides, rule_map};
use serde_json::json;

pub fn fragments(options: &ComposeOptions) -> Vec<ConfigFragment> {
    let mut rules = recommended_rules();
    apply_overrides(&mut rules, &options.stylistic.overrides());

    vec![ConfigFragment::rules(rules)]
}

fn recommended_rules() -> RuleMap {
    rule_map([
        ("stylistic/arrow-parens", RuleEntry::error_with([json!("always")])),
        ("stylistic/arrow-spacing", RuleEntry::error()),
        ("stylistic/block-spacing", RuleEntry::error_with([json!("always")])),
        (
            "stylistic/brace-style",
            RuleEntry::error_with([json!("1tbs"), json!({ "allowSingleLine": true })]),
        ),
        (
            "stylistic/comma-dangle",
            RuleEntry::error_with([json!("always-multiline")]),
        ),
        (
            "stylistic/comma-spacing",
            RuleEntry::error_with([json!({ "before": false, "after": true })]),
        ),
        ("stylistic/comma-style", RuleEntry::error_with([json!("last")])),
        (
            "stylistic/computed-property-spacing",
            RuleEntry::error_with([json!("never")]),
        ),
        ("stylistic/dot-location", RuleEntry::error_with([json!("property")])),
        ("stylistic/eol-last", RuleEntry::error()),
        ("stylistic/func-call-spacing", RuleEntry::error()),
        ("stylistic/indent", RuleEntry::error_with([json!(2)])),
        (
            "stylistic/key-spacing",
            RuleEntry::error_with([json!({ "beforeColon": false, "afterColon": true })]),
        ),
        (
            "stylistic/keyword-spacing",
            RuleEntry::error_with([json!({ "before": true, "after": true })]),
        ),
        (
            "stylistic/lines-between-class-members",
            RuleEntry::error_with([json!("always"), json!({ "exceptAfterSingleLine": true })]),
        ),
        ("stylistic/member-delimiter-style", RuleEntry::error()),
        (
            "stylistic/multiline-ternary",
            RuleEntry::error_with([json!("always-multiline")]),
        ),
        ("stylistic/new-parens", RuleEntry::error()),
        ("stylistic/no-extra-semi", RuleEntry::error()),
        ("stylistic/no-floating-decimal", RuleEntry::error()),
        ("stylistic/no-mixed-operators", RuleEntry::error()),
        ("stylistic/no-mixed-spaces-and-tabs", RuleEntry::error()),
        ("stylistic/no-multi-spaces", RuleEntry::error()),
        (
            "stylistic/no-multiple-empty-lines",
            RuleEntry::error_with([json!({ "max": 1, "maxBOF": 0, "maxEOF": 0 })]),
        ),
        ("stylistic/no-tabs", RuleEntry::error()),
        ("stylistic/no-trailing-spaces", RuleEntry::error()),
        ("stylistic/no-whitespace-before-property", RuleEntry::error()),
        (
            "stylistic/object-curly-spacing",
            RuleEntry::error_with([json!("always")]),
        ),
        (
            "stylistic/operator-linebreak",
            RuleEntry::error_with([json!("before")]),
        ),
        ("stylistic/padded-blocks", RuleEntry::error_with([json!("never")])),
        (
            "stylistic/quote-props",
            RuleEntry::error_with([json!("consistent-as-needed")]),
        ),
        (
            "stylistic/quotes",
            RuleEntry::error_with([json!("single"), json!({ "avoidEscape": true })]),
        ),
        ("stylistic/rest-spread-spacing", RuleEntry::error()),
        ("stylistic/semi", RuleEntry::error_with([json!("always")])),
        (
            "stylistic/semi-spacing",
            RuleEntry::error_with([json!({ "before": false, "after": true })]),
        ),
        ("stylistic/space-before-blocks", RuleEntry::error()),
        (
            "stylistic/space-before-function-paren",
            RuleEntry::error_with([json!({
                "anonymous": "always",
                "named": "never",
                "asyncArrow": "always"
            })]),
        ),
        ("stylistic/space-in-parens", RuleEntry::error_with([json!("never")])),
        ("stylistic/space-infix-ops", RuleEntry::error()),
        ("stylistic/space-unary-ops", RuleEntry::error()),
        ("stylistic/spaced-comment", RuleEntry::error_with([json!("always")])),
        ("stylistic/template-curly-spacing", RuleEntry::error()),
        ("stylistic/type-annotation-spacing", RuleEntry::error()),
        ("stylistic/wrap-iife", RuleEntry::error_with([json!("inside")])),
        ("stylistic/yield-star-spacing", RuleEntry::error()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FeatureToggle;

    #[test]
    fn test_recommended_baseline() {
        let fragments = fragments(&ComposeOptions {
            stylistic: FeatureToggle::On,
            ..ComposeOptions::default()
        });
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].is_global());
        assert_eq!(
            fragments[0].rules["stylistic/semi"],
            RuleEntry::error_with([json!("always")])
        );
    }

    #[test]
    fn test_overrides_win() {
        let fragments = fragments(&ComposeOptions {
            stylistic: FeatureToggle::Custom(rule_map([(
                "stylistic/semi",
                RuleEntry::error_with([json!("never")]),
            )])),
            ..ComposeOptions::default()
        });
        assert_eq!(
            fragments[0].rules["stylistic/semi"],
            RuleEntry::error_with([json!("never")])
        );
    }
}
