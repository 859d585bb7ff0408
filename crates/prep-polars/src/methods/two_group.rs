//! Two-sample extraction from a table or from vectors

use polars::prelude::*;
use prep_core::{Diagnostic, DiagnosticSink, NullSink, TwoSamples};
use tracing::{debug, instrument};
use crate::{
    methods::columns::{group_by_column, lookup, unique_labels},
    Result, TwoGroupInput,
};

/// Normalize either input mode into two samples with sizes and pooled dof.
///
/// In table mode the grouping column must hold exactly two distinct labels;
/// the one that appears first in row order becomes `x`.
///
/// ```rust
/// use polars::prelude::*;
/// use prep_polars::{extract_two_groups, TwoGroupInput};
///
/// let df = df![
///     "dv" => [10.0, 12.0, 14.0, 9.0],
///     "group" => ["A", "A", "B", "B"],
/// ]
/// .unwrap();
///
/// let samples = extract_two_groups(TwoGroupInput::table("dv", "group", &df)).unwrap();
/// assert_eq!(samples.x, vec![10.0, 12.0]);
/// assert_eq!(samples.y, vec![14.0, 9.0]);
/// assert_eq!(samples.dof, 2);
/// ```
pub fn extract_two_groups(input: TwoGroupInput<'_>) -> Result<TwoSamples> {
    extract_two_groups_with_sink(input, &NullSink)
}

/// Same as [`extract_two_groups`], reporting the split to `sink`
pub fn extract_two_groups_with_sink(
    input: TwoGroupInput<'_>,
    sink: &dyn DiagnosticSink,
) -> Result<TwoSamples> {
    match input {
        TwoGroupInput::Table { dv, group, data } => split_table(dv, group, data, sink),
        TwoGroupInput::Vectors { x, y } => Ok(TwoSamples::new(x, y)),
    }
}

#[instrument(skip(data, sink), fields(rows = data.height()))]
fn split_table(
    dv: &str,
    group: &str,
    data: &DataFrame,
    sink: &dyn DiagnosticSink,
) -> Result<TwoSamples> {
    lookup(data, dv)?;
    // Group count is checked before the value column is read
    if unique_labels(data, group)?.len() != 2 {
        return Err(prep_core::Error::not_two_groups().into());
    }
    let samples = group_by_column(data, dv, group)?.into_two_samples()?;

    if let Some((first, second)) = &samples.labels {
        debug!(
            "Split {} rows into {}={} and {}={}",
            data.height(),
            first,
            samples.nx,
            second,
            samples.ny
        );
        if sink.is_interested() {
            sink.emit(&Diagnostic::TwoGroupsSplit {
                column: group.to_string(),
                first: first.clone(),
                second: second.clone(),
            });
        }
    }

    Ok(samples)
}
