//! Nori Presets
//!
//! Shareable flat lint-configuration presets. [`compose`] assembles an
//! ordered sequence of configuration fragments from per-feature builders,
//! driven by a flat option record:
//!
//! ```no_run
//! use nori_presets::{ComposeOptions, FeatureToggle, compose};
//!
//! let options = ComposeOptions {
//!     typescript: FeatureToggle::On,
//!     jsdoc: FeatureToggle::On,
//!     prettier: FeatureToggle::On,
//!     ..ComposeOptions::default()
//! };
//!
//! let config = compose(&options, vec![])?;
//! println!("{}", serde_json::to_string_pretty(&config)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The consuming engine flattens the sequence left to right, last write
//! per rule identifier wins. Ignore fragments always come first and the
//! formatter-compatibility fragment always lands last, so exclusions take
//! effect before any rule and formatter conflicts are silenced after
//! everything else.

mod compose;
pub mod options;
pub mod presets;

pub use compose::compose;
pub use options::{ComposeOptions, FeatureToggle, GitignoreDiscovery, IgnoreOptions};

// Re-export the core model so callers need only this crate.
pub use nori_core::error::{ErrorKind, NoriError, Result};
pub use nori_core::fragment::{ConfigFragment, LanguageOptions, ParserKind, SourceType};
pub use nori_core::rules::{RuleEntry, RuleMap, RuleSeverity, rule_map};
