//! Input preparation for statistical tests
//!
//! Validates effect size labels and reshapes either a table of observations
//! or raw vectors into the sample layouts that t-tests and ANOVA effect sizes
//! consume.
//!
//! - [`is_valid_effect_type`] checks an effect size label.
//! - [`extract_two_groups`] produces `x`, `y`, their sizes and pooled dof.
//! - [`extract_groups`] produces one padded column per label plus counts.
//!
//! The core types live in [`prep_core`]; DataFrame support in [`prep_polars`].

pub use prep_core;
pub use prep_polars;

pub use prep_core::{
    is_valid_effect_type, CollectingSink, Diagnostic, DiagnosticSink, EffectFamily, EffectType,
    Effects, Error as CoreError, GroupSpec, GroupedSamples, LoggingSink, NullSink, TwoSamples,
};
pub use prep_polars::{
    extract_groups, extract_groups_with_sink, extract_two_groups, extract_two_groups_with_sink,
    Error, GroupExtractExt, GroupedData, Result, TwoGroupInput,
};

pub mod prelude {
    pub use crate::{
        extract_groups, extract_two_groups, is_valid_effect_type, Effects, GroupExtractExt,
        GroupSpec, TwoGroupInput, TwoSamples,
    };
}
