//! Column lookup and conversion shared by the extractors

use polars::prelude::*;
use prep_core::{discover_labels, GroupedSamples};
use crate::Result;

/// Look up a column, reporting a missing one as an uninterpretable input
pub(crate) fn lookup<'a>(data: &'a DataFrame, name: &str) -> Result<&'a Column> {
    data.column(name)
        .map_err(|_| prep_core::Error::uninterpretable(name).into())
}

/// Read a numeric column as `f64`, keeping nulls
pub(crate) fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let float_column = match column.dtype() {
        DataType::Float64 => column.clone(),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8 => column.cast(&DataType::Float64)?,
        _ => return Err(prep_core::Error::non_numeric().into()),
    };

    Ok(float_column.f64()?.into_iter().collect())
}

/// Unique labels of the `group` column in order of first appearance,
/// a missing value counting as one label
pub(crate) fn unique_labels(data: &DataFrame, group: &str) -> Result<Vec<String>> {
    let labels = lookup(data, group)?.cast(&DataType::String)?;
    Ok(discover_labels(labels.str()?.into_iter()))
}

/// Partition the `dv` column of `data` by the labels in `group`.
///
/// Labels are the string rendering of the grouping column's values and are
/// kept in order of first appearance. A missing label becomes an empty group.
pub(crate) fn group_by_column(data: &DataFrame, dv: &str, group: &str) -> Result<GroupedSamples> {
    let dv_column = lookup(data, dv)?;
    let group_column = lookup(data, group)?;

    let values = numeric_values(dv_column)?;
    let labels = group_column.cast(&DataType::String)?;

    Ok(GroupedSamples::from_rows(labels.str()?.into_iter(), values)?)
}
