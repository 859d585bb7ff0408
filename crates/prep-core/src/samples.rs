//! Two-sample inputs for pairwise tests

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

/// Two numeric samples ready for a two-sample comparison
///
/// When built from a table, `x` holds the group whose label appears first in
/// row order and `y` the other one. Downstream effect sizes take their sign
/// from this ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSamples {
    /// First sample
    pub x: Vec<f64>,
    /// Second sample
    pub y: Vec<f64>,
    /// Length of `x`
    pub nx: usize,
    /// Length of `y`
    pub ny: usize,
    /// Pooled degrees of freedom, `nx + ny - 2`
    pub dof: i64,
    /// Group labels that produced `x` and `y`, when split from a table
    pub labels: Option<(String, String)>,
}

impl TwoSamples {
    /// Build from two plain numeric sequences.
    ///
    /// Both arguments must be sequences; a bare number is rejected at
    /// compile time:
    ///
    /// ```compile_fail
    /// use prep_core::TwoSamples;
    ///
    /// let samples = TwoSamples::from_vectors(3.0, vec![4.0, 5.0]);
    /// ```
    ///
    /// ```
    /// use prep_core::TwoSamples;
    ///
    /// let samples = TwoSamples::from_vectors(vec![1, 2, 3], vec![4, 5]);
    /// assert_eq!(samples.x, vec![1.0, 2.0, 3.0]);
    /// assert_eq!(samples.dof, 3);
    /// ```
    pub fn from_vectors<X, Y, T>(x: X, y: Y) -> Self
    where
        X: IntoIterator<Item = T>,
        Y: IntoIterator<Item = T>,
        T: AsPrimitive<f64>,
    {
        Self::new(
            x.into_iter().map(AsPrimitive::<f64>::as_).collect(),
            y.into_iter().map(AsPrimitive::<f64>::as_).collect(),
        )
    }

    /// Build from owned samples, computing sizes and degrees of freedom
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        let nx = x.len();
        let ny = y.len();
        // Degenerate inputs give zero or negative dof; callers decide what to do.
        let dof = nx as i64 + ny as i64 - 2;
        Self {
            x,
            y,
            nx,
            ny,
            dof,
            labels: None,
        }
    }

    /// Attach the group labels `x` and `y` were split on
    pub fn with_labels(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.labels = Some((first.into(), second.into()));
        self
    }

    /// Unpack into the `(x, y, nx, ny, dof)` tuple
    pub fn into_tuple(self) -> (Vec<f64>, Vec<f64>, usize, usize, i64) {
        (self.x, self.y, self.nx, self.ny, self.dof)
    }
}
