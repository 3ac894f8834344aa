//! The composer: assembles the ordered fragment sequence

use crate::options::ComposeOptions;
use crate::presets;
use nori_core::error::Result;
use nori_core::fragment::ConfigFragment;
use tracing::debug;

/// Compose the full ordered configuration.
///
/// Fixed precedence, strictly append-only: ignore fragments, the mandatory
/// base rules, each enabled optional preset, caller-supplied custom
/// fragments verbatim, and the formatter-compatibility fragment last. The
/// consuming engine flattens the sequence left to right, so a later
/// fragment's directive wins per rule identifier.
///
/// Fails only when ignore-file discovery is on and no ignore file exists
/// anywhere above the working directory.
pub fn compose(
    options: &ComposeOptions,
    custom_fragments: Vec<ConfigFragment>,
) -> Result<Vec<ConfigFragment>> {
    let mut config = presets::ignores::fragments(options)?;
    config.extend(presets::base::fragments(options));

    if options.jsdoc.is_enabled() {
        config.extend(presets::jsdoc::fragments(options));
    }
    if options.import.is_enabled() {
        config.extend(presets::import::fragments(options));
    }
    if options.promise.is_enabled() {
        config.extend(presets::promise::fragments(options));
    }
    if options.sort.is_enabled() {
        config.extend(presets::sort::fragments(options));
    }
    if options.stylistic.is_enabled() {
        config.extend(presets::stylistic::fragments(options));
    }

    config.extend(custom_fragments);

    // Last, so its disables beat anything above, custom fragments included.
    if options.prettier.is_enabled() {
        config.extend(presets::prettier::fragments(options));
    }

    debug!("Composed {} fragments", config.len());
    Ok(config)
}
