//! Formatter-compatibility rules
//!
//! Disables every rule the auto-formatter would otherwise re-flag, then
//! layers caller overrides on top of that disable-everything default. The
//! composer guarantees this fragment lands last in the sequence so its
//! disables win over every earlier fragment.

use crate::options::ComposeOptions;
use nori_core::fragment::ConfigFragment;
use nori_core::rules::{RuleEntry, RuleMap, apply_overrides, rule_map};

pub fn fragments(options: &ComposeOptions) -> Vec<ConfigFragment> {
    let mut rules = conflicting_rules();
    rules.insert("prettier/prettier".to_string(), RuleEntry::error());
    apply_overrides(&mut rules, &options.prettier.overrides());

    vec![ConfigFragment::rules(rules)]
}

/// Formatting rules the auto-formatter owns outright.
fn conflicting_rules() -> RuleMap {
    let disabled = [
        "array-bracket-newline",
        "array-bracket-spacing",
        "array-element-newline",
        "arrow-parens",
        "arrow-spacing",
        "block-spacing",
        "brace-style",
        "comma-dangle",
        "comma-spacing",
        "comma-style",
        "computed-property-spacing",
        "dot-location",
        "eol-last",
        "func-call-spacing",
        "function-call-argument-newline",
        "function-paren-newline",
        "implicit-arrow-linebreak",
        "indent",
        "indent-legacy",
        "jsx-quotes",
        "key-spacing",
        "keyword-spacing",
        "linebreak-style",
        "max-statements-per-line",
        "multiline-ternary",
        "new-parens",
        "newline-per-chained-call",
        "no-extra-parens",
        "no-extra-semi",
        "no-floating-decimal",
        "no-mixed-operators",
        "no-mixed-spaces-and-tabs",
        "no-multi-spaces",
        "no-multiple-empty-lines",
        "no-tabs",
        "no-trailing-spaces",
        "no-unexpected-multiline",
        "no-whitespace-before-property",
        "nonblock-statement-body-position",
        "object-curly-newline",
        "object-curly-spacing",
        "object-property-newline",
        "one-var-declaration-per-line",
        "operator-linebreak",
        "padded-blocks",
        "quote-props",
        "quotes",
        "semi",
        "semi-spacing",
        "semi-style",
        "space-before-blocks",
        "space-before-function-paren",
        "space-in-parens",
        "space-infix-ops",
        "space-unary-ops",
        "switch-colon-spacing",
        "template-tag-spacing",
        "unicode-bom",
        "wrap-iife",
        "wrap-regex",
    ];

    rule_map(disabled.into_iter().map(|id| (id, RuleEntry::off())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FeatureToggle;

    #[test]
    fn test_disables_formatting_rules() {
        let fragments = fragments(&ComposeOptions {
            prettier: FeatureToggle::On,
            ..ComposeOptions::default()
        });
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].rules["semi"].is_off());
        assert!(fragments[0].rules["indent-legacy"].is_off());
        assert_eq!(fragments[0].rules["prettier/prettier"], RuleEntry::error());
    }

    #[test]
    fn test_overrides_win() {
        let fragments = fragments(&ComposeOptions {
            prettier: FeatureToggle::Custom(rule_map([(
                "prettier/prettier",
                RuleEntry::off(),
            )])),
            ..ComposeOptions::default()
        });
        assert!(fragments[0].rules["prettier/prettier"].is_off());
    }
}
