//! Caller-facing options driving composition
//!
//! The option record is a flat set of feature toggles and per-feature
//! override payloads. Toggles accept the loose `false | true | { ... }`
//! wire shape: booleans only control whether a builder runs at all, while
//! an explicit mapping enables the area and layers over its defaults.

use nori_core::rules::RuleMap;
use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Enable state and override payload for an optional feature area
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FeatureToggle {
    /// Skip the builder entirely
    #[default]
    Off,
    /// Run the builder with its built-in defaults
    On,
    /// Run the builder and layer this mapping over its defaults
    Custom(RuleMap),
}

impl FeatureToggle {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, FeatureToggle::Off)
    }

    /// The override payload carried by this toggle.
    ///
    /// Booleans carry no rule data; only an explicit mapping contributes
    /// overrides. Entries are trusted as already-shaped directives and pass
    /// through unvalidated.
    pub fn overrides(&self) -> RuleMap {
        match self {
            FeatureToggle::Custom(rules) => rules.clone(),
            _ => RuleMap::new(),
        }
    }
}

impl Serialize for FeatureToggle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FeatureToggle::Off => serializer.serialize_bool(false),
            FeatureToggle::On => serializer.serialize_bool(true),
            FeatureToggle::Custom(rules) => rules.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FeatureToggle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Rules(RuleMap),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => FeatureToggle::Off,
            Raw::Flag(true) => FeatureToggle::On,
            Raw::Rules(rules) => FeatureToggle::Custom(rules),
        })
    }
}

/// Where to look for an ignore file during ignore resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GitignoreDiscovery {
    /// Skip discovery entirely
    Disabled,
    /// Walk upward from the process working directory
    #[default]
    FromCwd,
    /// Walk upward from an explicit directory
    From(PathBuf),
}

impl GitignoreDiscovery {
    /// The directory the upward walk starts from, `None` when disabled
    pub fn start_dir(&self) -> Option<PathBuf> {
        match self {
            GitignoreDiscovery::Disabled => None,
            GitignoreDiscovery::FromCwd => Some(PathBuf::from(".")),
            GitignoreDiscovery::From(dir) => Some(dir.clone()),
        }
    }
}

impl Serialize for GitignoreDiscovery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GitignoreDiscovery::Disabled => serializer.serialize_bool(false),
            GitignoreDiscovery::FromCwd => serializer.serialize_bool(true),
            GitignoreDiscovery::From(cwd) => {
                let mut s = serializer.serialize_struct("GitignoreDiscovery", 1)?;
                s.serialize_field("cwd", cwd)?;
                s.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for GitignoreDiscovery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Explicit { cwd: PathBuf },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => GitignoreDiscovery::Disabled,
            Raw::Flag(true) => GitignoreDiscovery::FromCwd,
            Raw::Explicit { cwd } => GitignoreDiscovery::From(cwd),
        })
    }
}

/// Ignore-resolution options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IgnoreOptions {
    /// Extra exclude globs, unioned with the built-in defaults
    pub globs: Vec<String>,

    /// Ignore-file discovery behavior
    pub gitignore: GitignoreDiscovery,
}

/// The full option record for [`compose`](crate::compose)
///
/// Defaults: every optional feature off, library mode off, ignore-file
/// discovery on from the process working directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeOptions {
    /// Library mode: console output stays permitted, and documentation
    /// comments become mandatory for externally visible members
    pub library: bool,

    /// Ignore resolution; `None` means defaults (discovery on)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignores: Option<IgnoreOptions>,

    /// Overrides for the always-on base rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<RuleMap>,

    /// Typed-source support: adds typed-source fragments and adjustments
    pub typescript: FeatureToggle,

    /// Documentation-comment rules
    pub jsdoc: FeatureToggle,

    /// Import-hygiene rules
    pub import: FeatureToggle,

    /// Promise-usage rules
    pub promise: FeatureToggle,

    /// Sort-ordering rules
    pub sort: FeatureToggle,

    /// Stylistic-formatting rules
    pub stylistic: FeatureToggle,

    /// Formatter compatibility: disables rules the auto-formatter re-flags
    pub prettier: FeatureToggle,
}
