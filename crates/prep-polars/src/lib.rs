//! Polars integration for preparing statistical test inputs
//!
//! This crate turns Polars DataFrames into the sample shapes the downstream
//! tests consume: two samples for pairwise comparisons, or one sample per
//! label for ANOVA-style effects.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use prep_polars::{Effects, GroupExtractExt, GroupSpec, NullSink};
//!
//! let df = df![
//!     "grp" => ["x", "x", "y"],
//!     "dv" => [1.0, 2.0, 3.0],
//! ]
//! .unwrap();
//!
//! let spec = GroupSpec::new("dv").within("grp").effects(Effects::Within);
//! let grouped = df.grouped_with_sink(&spec, &NullSink).unwrap();
//! assert_eq!(grouped.counts, vec![2, 1]);
//! assert_eq!(grouped.labels(), vec!["x", "y"]);
//! ```

mod config;
mod error;
mod methods;
mod traits;


pub use config::*;
pub use error::{Error, Result};
pub use methods::{
    extract_groups, extract_groups_with_sink, extract_two_groups, extract_two_groups_with_sink,
    GroupedData,
};
pub use traits::*;

// Re-export commonly used types from dependencies
pub use prep_core::{
    is_valid_effect_type, CollectingSink, Diagnostic, DiagnosticSink, EffectType, Effects,
    GroupSpec, LoggingSink, NullSink, TwoSamples, NULL_LABEL,
};
