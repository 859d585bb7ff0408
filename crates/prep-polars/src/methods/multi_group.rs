//! Multi-group extraction for ANOVA-style effects

use polars::prelude::*;
use prep_core::{Diagnostic, DiagnosticSink, GroupSpec, LoggingSink};
use tracing::{debug, instrument};
use crate::{methods::columns::group_by_column, Result};

/// Per-group samples laid out as a table
#[derive(Debug, Clone)]
pub struct GroupedData {
    /// One `Float64` column per label in discovery order, shorter columns
    /// padded with nulls to the largest group
    pub table: DataFrame,
    /// Observation count per group, parallel to the table's columns
    pub counts: Vec<usize>,
}

impl GroupedData {
    /// Labels in discovery order
    pub fn labels(&self) -> Vec<String> {
        self.table
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Unpack into `(table, counts)`
    pub fn into_parts(self) -> (DataFrame, Vec<usize>) {
        (self.table, self.counts)
    }
}

/// Partition `spec.dv` by the column selected through `spec.effects`.
///
/// A missing group value forms its own column named
/// [`NULL_LABEL`](prep_core::NULL_LABEL) with a count of zero.
/// Discovered labels are logged at info level; use
/// [`extract_groups_with_sink`] to route them elsewhere.
pub fn extract_groups(data: &DataFrame, spec: &GroupSpec) -> Result<GroupedData> {
    extract_groups_with_sink(data, spec, &LoggingSink::default())
}

/// Same as [`extract_groups`], reporting discovered labels to `sink`
#[instrument(
    skip(data, spec, sink),
    fields(rows = data.height(), dv = %spec.dv, effects = %spec.effects)
)]
pub fn extract_groups_with_sink(
    data: &DataFrame,
    spec: &GroupSpec,
    sink: &dyn DiagnosticSink,
) -> Result<GroupedData> {
    let column = spec.grouping_column()?;
    let grouped = group_by_column(data, &spec.dv, column)?;

    let labels: Vec<String> = grouped.labels().map(str::to_string).collect();
    debug!("Found {} groups in {}", labels.len(), column);
    if sink.is_interested() {
        sink.emit(&Diagnostic::LabelsDiscovered {
            column: column.to_string(),
            labels,
        });
    }

    let counts = grouped.counts();
    let columns: Vec<Column> = grouped
        .padded()
        .into_iter()
        .map(|(label, values)| Series::new(label.as_str().into(), values).into())
        .collect();

    Ok(GroupedData {
        table: DataFrame::new(columns)?,
        counts,
    })
}
