//! Promise-usage rules

use crate::options::ComposeOptions;
use nori_core::fragment::ConfigFragment;
use nori_core::rules::{RuleEntry, RuleMap, apply_overrides, rule_map};

pub fn fragments(options: &ComposeOptions) -> Vec<ConfigFragment> {
    let mut rules = recommended_rules();
    // Return values are meaningless for fire-and-forget chains.
    rules.insert("promise/always-return".to_string(), RuleEntry::off());
    apply_overrides(&mut rules, &options.promise.overrides());

    vec![ConfigFragment::rules(rules)]
}

fn recommended_rules() -> RuleMap {
    rule_map([
        ("promise/always-return", RuleEntry::error()),
        ("promise/no-return-wrap", RuleEntry::error()),
        ("promise/param-names", RuleEntry::error()),
        ("promise/catch-or-return", RuleEntry::error()),
        ("promise/no-native", RuleEntry::off()),
        ("promise/no-nesting", RuleEntry::warn()),
        ("promise/no-promise-in-callback", RuleEntry::warn()),
        ("promise/no-callback-in-promise", RuleEntry::warn()),
        ("promise/avoid-new", RuleEntry::off()),
        ("promise/no-new-statics", RuleEntry::error()),
        ("promise/no-return-in-finally", RuleEntry::warn()),
        ("promise/valid-params", RuleEntry::warn()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FeatureToggle;

    #[test]
    fn test_always_return_relaxed() {
        let fragments = fragments(&ComposeOptions {
            promise: FeatureToggle::On,
            ..ComposeOptions::default()
        });
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].rules["promise/always-return"].is_off());
        assert_eq!(
            fragments[0].rules["promise/catch-or-return"],
            RuleEntry::error()
        );
    }

    #[test]
    fn test_overrides_win() {
        let fragments = fragments(&ComposeOptions {
            promise: FeatureToggle::Custom(rule_map([(
                "promise/no-nesting",
                RuleEntry::error(),
            )])),
            ..ComposeOptions::default()
        });
        assert_eq!(fragments[0].rules["promise/no-nesting"], RuleEntry::error());
    }
}
