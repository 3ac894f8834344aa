//! Configuration fragments
//!
//! A fragment is one unit of composed output: an applicability predicate
//! (include and exclude globs) plus a rule map, with optional language
//! options and nested plugin settings. A fragment with no include globs
//! applies globally. The consuming engine flattens an ordered fragment
//! sequence left to right, last write per rule identifier wins.

use crate::rules::RuleMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parser selection for a fragment's language options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    /// The engine's default parser
    Default,
    /// The typed-source parser
    Typescript,
}

/// Source module semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Module,
    Script,
}

/// Language options attached to a fragment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecma_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,

    /// Parser-specific options, opaque to the composer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<Value>,
}

/// One unit of composed configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFragment {
    /// Include globs; empty means the fragment applies globally
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Exclude globs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_options: Option<LanguageOptions>,

    /// Nested plugin settings, opaque to the composer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    #[serde(skip_serializing_if = "RuleMap::is_empty")]
    pub rules: RuleMap,
}

impl ConfigFragment {
    /// A global fragment carrying only exclude globs
    pub fn global_ignores(ignores: Vec<String>) -> Self {
        Self {
            ignores,
            ..Self::default()
        }
    }

    /// A global fragment carrying only rules
    pub fn rules(rules: RuleMap) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// A fragment scoped to the given include globs
    pub fn scoped(files: Vec<String>, rules: RuleMap) -> Self {
        Self {
            files,
            rules,
            ..Self::default()
        }
    }

    pub fn is_global(&self) -> bool {
        self.files.is_empty()
    }
}

/// Owned glob list from static pattern slices
pub fn glob_list(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| (*p).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleEntry, rule_map};

    #[test]
    fn test_fragment_serialization_shape() {
        let fragment = ConfigFragment::scoped(
            glob_list(&["**/*.ts"]),
            rule_map([("no-console", RuleEntry::error())]),
        );

        let json = serde_json::to_value(&fragment).unwrap();
        assert_eq!(json["files"][0], "**/*.ts");
        assert_eq!(json["rules"]["no-console"], "error");
        assert!(json.get("ignores").is_none());
        assert!(json.get("languageOptions").is_none());
    }

    #[test]
    fn test_global_fragment() {
        let fragment = ConfigFragment::global_ignores(glob_list(&["**/dist"]));
        assert!(fragment.is_global());
        assert!(fragment.rules.is_empty());
    }
}
