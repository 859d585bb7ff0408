//! Extension trait for preparing test inputs from Polars DataFrames

use polars::prelude::*;
use prep_core::{DiagnosticSink, GroupSpec, TwoSamples};
use crate::{
    methods::{extract_groups, extract_groups_with_sink, extract_two_groups},
    GroupedData, Result, TwoGroupInput,
};

/// Extension trait for group extraction on Polars DataFrames
pub trait GroupExtractExt {
    /// Split a value column into two samples by a two-label group column
    ///
    /// # Arguments
    /// * `dv` - Column containing the values
    /// * `group` - Column containing exactly two distinct labels
    ///
    /// # Returns
    /// Samples where `x` belongs to the label appearing first in row order
    fn two_groups(&self, dv: &str, group: &str) -> Result<TwoSamples>;

    /// Partition a value column into one sample per label
    ///
    /// # Arguments
    /// * `spec` - Value column, factor columns, and the effect to group for
    ///
    /// # Returns
    /// A table with one column per label plus per-label counts
    fn grouped(&self, spec: &GroupSpec) -> Result<GroupedData>;

    /// Like [`grouped`](Self::grouped), reporting diagnostics to `sink`
    fn grouped_with_sink(
        &self,
        spec: &GroupSpec,
        sink: &dyn DiagnosticSink,
    ) -> Result<GroupedData>;
}

impl GroupExtractExt for DataFrame {
    fn two_groups(&self, dv: &str, group: &str) -> Result<TwoSamples> {
        extract_two_groups(TwoGroupInput::table(dv, group, self))
    }

    fn grouped(&self, spec: &GroupSpec) -> Result<GroupedData> {
        extract_groups(self, spec)
    }

    fn grouped_with_sink(
        &self,
        spec: &GroupSpec,
        sink: &dyn DiagnosticSink,
    ) -> Result<GroupedData> {
        extract_groups_with_sink(self, spec, sink)
    }
}
