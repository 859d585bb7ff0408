//! Core types for preparing statistical test inputs
//!
//! This crate holds the table-independent half of input preparation: the
//! effect type validator, the two-sample and grouped-sample shapes that
//! downstream tests consume, the group selection configuration, and the
//! diagnostics seam. Dataframe-backed extraction lives in `prep-polars`.
//!
//! # Example
//!
//! ```rust
//! use prep_core::{is_valid_effect_type, GroupedSamples, TwoSamples};
//!
//! assert!(is_valid_effect_type("hedges"));
//!
//! let samples = TwoSamples::from_vectors(vec![1.0, 2.0, 3.0], vec![4.0, 5.0]);
//! assert_eq!((samples.nx, samples.ny, samples.dof), (3, 2, 3));
//!
//! let grouped = GroupedSamples::from_rows(
//!     ["x", "x", "y"].map(Some),
//!     [1.0, 2.0, 3.0].map(Some),
//! )
//! .unwrap();
//! assert_eq!(grouped.counts(), vec![2, 1]);
//! ```

pub mod config;
pub mod diagnostics;
pub mod effect;
pub mod error;
pub mod grouping;
pub mod samples;

pub use config::{Effects, GroupSpec};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LoggingSink, NullSink};
pub use effect::{is_valid_effect_type, EffectFamily, EffectType};
pub use error::{Error, Result};
pub use grouping::{discover_labels, GroupedSamples, NULL_LABEL};
pub use samples::TwoSamples;

// Re-exported so callers can name the numeric input bound
pub use num_traits;
