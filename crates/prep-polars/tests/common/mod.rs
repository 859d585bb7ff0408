//! Common test utilities for prep-polars tests

use polars::prelude::*;

/// Table with a numeric `dv` column and a string `group` column
pub fn create_grouped_df(dv: &[f64], group: &[&str]) -> DataFrame {
    df!["dv" => dv, "group" => group].unwrap()
}

/// Read a column of a grouped table as optional floats
pub fn column_values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}
