//! Partitioning values by group label
//!
//! [`GroupedSamples`] keeps groups in label discovery order: the first label
//! seen in the row sequence is group 0, the next new label is group 1, and so
//! on. Every accessor preserves that order.

use crate::{Error, Result, TwoSamples};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Label given to rows whose group value is missing
pub const NULL_LABEL: &str = "null";

/// Unique labels in order of first appearance.
///
/// A missing label counts as one distinct label, rendered as [`NULL_LABEL`].
pub fn discover_labels<'a, L>(labels: L) -> Vec<String>
where
    L: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut discovered = Vec::new();
    for label in labels {
        let label = label.unwrap_or(NULL_LABEL);
        if seen.insert(label) {
            discovered.push(label.to_string());
        }
    }
    discovered
}

/// Per-group numeric samples in label discovery order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedSamples {
    groups: Vec<(String, Vec<f64>)>,
}

impl GroupedSamples {
    /// Partition `values` by the row-aligned `labels`.
    ///
    /// A missing label forms its own group named [`NULL_LABEL`] that never
    /// receives values, since a missing label equals no row. Missing values
    /// are kept as `NaN` so group sizes still count every labelled row.
    pub fn from_rows<'a, L, V>(labels: L, values: V) -> Result<Self>
    where
        L: IntoIterator<Item = Option<&'a str>>,
        V: IntoIterator<Item = Option<f64>>,
    {
        let labels: Vec<Option<&str>> = labels.into_iter().collect();
        let values: Vec<Option<f64>> = values.into_iter().collect();
        if labels.len() != values.len() {
            return Err(Error::length_mismatch(labels.len(), values.len()));
        }

        let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (label, value) in labels.into_iter().zip(values) {
            let slot = *index.entry(label.unwrap_or(NULL_LABEL)).or_insert_with(|| {
                groups.push((label.unwrap_or(NULL_LABEL).to_string(), Vec::new()));
                groups.len() - 1
            });
            if label.is_some() {
                groups[slot].1.push(value.unwrap_or(f64::NAN));
            }
        }
        Ok(Self { groups })
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no group was found
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Labels in discovery order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(label, _)| label.as_str())
    }

    /// Observation count per group, parallel to [`labels`](Self::labels)
    pub fn counts(&self) -> Vec<usize> {
        self.groups.iter().map(|(_, values)| values.len()).collect()
    }

    /// Samples for one label
    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.groups
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterate `(label, samples)` pairs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.groups
            .iter()
            .map(|(label, values)| (label.as_str(), values.as_slice()))
    }

    /// Size of the largest group, 0 when there are no groups
    pub fn max_len(&self) -> usize {
        self.groups
            .iter()
            .map(|(_, values)| values.len())
            .max()
            .unwrap_or(0)
    }

    /// Rectangular view: every group padded with `None` to [`max_len`](Self::max_len)
    pub fn padded(&self) -> Vec<(String, Vec<Option<f64>>)> {
        let rows = self.max_len();
        self.groups
            .iter()
            .map(|(label, values)| {
                let mut column: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
                column.resize(rows, None);
                (label.clone(), column)
            })
            .collect()
    }

    /// Split into two samples, requiring exactly two groups.
    ///
    /// The first-discovered group becomes `x`.
    pub fn into_two_samples(self) -> Result<TwoSamples> {
        let [(first, x), (second, y)]: [(String, Vec<f64>); 2] = self
            .groups
            .try_into()
            .map_err(|_| Error::not_two_groups())?;
        Ok(TwoSamples::new(x, y).with_labels(first, second))
    }
}
