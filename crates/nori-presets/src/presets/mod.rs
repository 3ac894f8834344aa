//! Per-feature fragment builders
//!
//! Each module builds the fragments for one feature area: built-in rule
//! tables grouped thematically, conditional adjustments from the option
//! record, and caller overrides layered last. Builders never fail except
//! for ignore resolution, whose discovery walk touches the filesystem.

pub mod base;
pub mod ignores;
pub mod import;
pub mod jsdoc;
pub mod prettier;
pub mod promise;
pub mod sort;
pub mod stylistic;
