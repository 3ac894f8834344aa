//! Rule directives and rule maps
//!
//! A rule map binds rule identifiers to directives (severity plus optional
//! rule-specific options). Maps preserve insertion order so the composed
//! output stays deterministic, and layering a later map over an earlier one
//! replaces values per key.

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    /// Disable the rule
    Off,
    /// Warning (doesn't fail the run)
    Warn,
    /// Error (fails the run)
    Error,
}

/// Ordered mapping of rule identifier to directive
pub type RuleMap = IndexMap<String, RuleEntry>;

/// A single rule directive: a bare severity, or a severity with an ordered
/// list of rule-specific options. Option shapes are opaque to the composer
/// and pass through to the consuming engine unvalidated.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleEntry {
    Severity(RuleSeverity),
    WithOptions {
        severity: RuleSeverity,
        options: Vec<Value>,
    },
}

impl RuleEntry {
    pub fn off() -> Self {
        Self::Severity(RuleSeverity::Off)
    }

    pub fn warn() -> Self {
        Self::Severity(RuleSeverity::Warn)
    }

    pub fn error() -> Self {
        Self::Severity(RuleSeverity::Error)
    }

    /// An error-level directive with rule-specific options
    pub fn error_with(options: impl IntoIterator<Item = Value>) -> Self {
        Self::WithOptions {
            severity: RuleSeverity::Error,
            options: options.into_iter().collect(),
        }
    }

    /// A warn-level directive with rule-specific options
    pub fn warn_with(options: impl IntoIterator<Item = Value>) -> Self {
        Self::WithOptions {
            severity: RuleSeverity::Warn,
            options: options.into_iter().collect(),
        }
    }

    /// The severity carried by this directive
    pub fn severity(&self) -> RuleSeverity {
        match self {
            RuleEntry::Severity(severity) => *severity,
            RuleEntry::WithOptions { severity, .. } => *severity,
        }
    }

    pub fn is_off(&self) -> bool {
        self.severity() == RuleSeverity::Off
    }
}

// The engine-facing encoding is a bare severity string, or an array of
// `[severity, ...options]` when options are present.
impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RuleEntry::Severity(severity) => severity.serialize(serializer),
            RuleEntry::WithOptions { severity, options } => {
                let mut seq = serializer.serialize_seq(Some(options.len() + 1))?;
                seq.serialize_element(severity)?;
                for option in options {
                    seq.serialize_element(option)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Severity(RuleSeverity),
            Parts(Vec<Value>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Severity(severity) => Ok(RuleEntry::Severity(severity)),
            Raw::Parts(parts) => {
                let mut parts = parts.into_iter();
                let severity = parts
                    .next()
                    .ok_or_else(|| de::Error::custom("rule directive array is empty"))?;
                let severity =
                    serde_json::from_value(severity).map_err(de::Error::custom)?;
                Ok(RuleEntry::WithOptions {
                    severity,
                    options: parts.collect(),
                })
            }
        }
    }
}

/// Build a rule map from static identifier/directive pairs
pub fn rule_map<'a>(entries: impl IntoIterator<Item = (&'a str, RuleEntry)>) -> RuleMap {
    entries
        .into_iter()
        .map(|(id, entry)| (id.to_string(), entry))
        .collect()
}

/// Layer a partial mapping over `rules`, last write per identifier wins.
///
/// Shallow replacement: an override's directive substitutes the built-in
/// one wholesale, options included.
pub fn apply_overrides(rules: &mut RuleMap, overrides: &RuleMap) {
    for (id, entry) in overrides {
        rules.insert(id.clone(), entry.clone());
    }
}

/// Replace a base rule with an equivalent rule by disabling it and setting
/// the replacement in the same step.
///
/// Required when enabling both rules would double-report; the disable and
/// its replacement must never appear without each other.
pub fn replace_base_rule(rules: &mut RuleMap, base_rule: &str, rule: &str, entry: RuleEntry) {
    rules.insert(base_rule.to_string(), RuleEntry::off());
    rules.insert(rule.to_string(), entry);
}
