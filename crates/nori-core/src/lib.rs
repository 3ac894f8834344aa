//! Nori Core
//!
//! Core configuration model for nori shareable lint presets.
//! This crate provides the fragment and rule-map types the preset builders
//! compose, the shared layering helpers, and ignore-file discovery.
//!
//! Everything here is pure data transformation: the one exception is the
//! blocking upward walk and read of a single ignore file. Nothing holds
//! state across calls, so concurrent composition is safe by construction.

pub mod error;
pub mod fragment;
pub mod ignore_file;
pub mod rules;

// Re-export commonly used types
pub use error::{ErrorKind, NoriError, Result};
pub use fragment::{ConfigFragment, LanguageOptions, ParserKind, SourceType, glob_list};
pub use rules::{
    RuleEntry, RuleMap, RuleSeverity, apply_overrides, replace_base_rule, rule_map,
};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nori=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
