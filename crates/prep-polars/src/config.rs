//! Input selection for two-group extraction

use polars::prelude::*;
use prep_core::TwoSamples;

/// Where the two samples come from
///
/// Exactly one source is given, so there is no "neither" case to handle.
#[derive(Debug, Clone)]
pub enum TwoGroupInput<'a> {
    /// Split column `dv` of `data` on the two labels of column `group`.
    ///
    /// The label appearing first in row order becomes `x`.
    Table {
        dv: &'a str,
        group: &'a str,
        data: &'a DataFrame,
    },

    /// Use the given vectors as they are
    Vectors { x: Vec<f64>, y: Vec<f64> },
}

impl<'a> TwoGroupInput<'a> {
    /// Table input
    pub fn table(dv: &'a str, group: &'a str, data: &'a DataFrame) -> Self {
        Self::Table { dv, group, data }
    }

    /// Vector input from any numeric sequences
    pub fn vectors<X, Y, T>(x: X, y: Y) -> Self
    where
        X: IntoIterator<Item = T>,
        Y: IntoIterator<Item = T>,
        T: prep_core::num_traits::AsPrimitive<f64>,
    {
        let TwoSamples { x, y, .. } = TwoSamples::from_vectors(x, y);
        Self::Vectors { x, y }
    }
}
