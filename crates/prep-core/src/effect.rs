//! Recognized effect size types

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Effect size types accepted by the downstream tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    /// Hedges' g
    #[serde(rename = "hedges")]
    Hedges,
    /// Cohen's d
    #[serde(rename = "cohen")]
    Cohen,
    /// Correlation coefficient
    #[serde(rename = "r")]
    R,
    /// Eta-squared
    #[serde(rename = "eta-square")]
    EtaSquare,
    /// Odds ratio
    #[serde(rename = "odds-ratio")]
    OddsRatio,
    /// Area under the ROC curve
    #[serde(rename = "AUC")]
    Auc,
}

/// Broad family an effect size type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectFamily {
    /// Standardized mean difference (Cohen's d family)
    StandardizedMeanDifference,
    /// Correlation-based measure
    Correlation,
    /// Proportion of variance explained
    VarianceExplained,
    /// Ratio of odds
    OddsRatio,
    /// Probability-based measure
    Probability,
}

impl EffectType {
    /// Every recognized effect type, in canonical order
    pub const ALL: [EffectType; 6] = [
        Self::Hedges,
        Self::Cohen,
        Self::R,
        Self::EtaSquare,
        Self::OddsRatio,
        Self::Auc,
    ];

    /// The label used to select this effect type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hedges => "hedges",
            Self::Cohen => "cohen",
            Self::R => "r",
            Self::EtaSquare => "eta-square",
            Self::OddsRatio => "odds-ratio",
            Self::Auc => "AUC",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hedges => "Hedges' g",
            Self::Cohen => "Cohen's d",
            Self::R => "Correlation coefficient",
            Self::EtaSquare => "Eta-squared",
            Self::OddsRatio => "Odds ratio",
            Self::Auc => "Area under the curve",
        }
    }

    /// Family this effect type belongs to
    pub fn family(&self) -> EffectFamily {
        match self {
            Self::Hedges | Self::Cohen => EffectFamily::StandardizedMeanDifference,
            Self::R => EffectFamily::Correlation,
            Self::EtaSquare => EffectFamily::VarianceExplained,
            Self::OddsRatio => EffectFamily::OddsRatio,
            Self::Auc => EffectFamily::Probability,
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("Unrecognized effect type '{s}'")))
    }
}

/// Check whether `label` names a recognized effect type.
///
/// Matching is exact and case-sensitive. A missing label is never valid.
///
/// ```
/// use prep_core::is_valid_effect_type;
///
/// assert!(is_valid_effect_type("cohen"));
/// assert!(is_valid_effect_type("AUC"));
/// assert!(!is_valid_effect_type("auc"));
/// assert!(!is_valid_effect_type(None));
/// ```
pub fn is_valid_effect_type<'a>(label: impl Into<Option<&'a str>>) -> bool {
    label
        .into()
        .is_some_and(|label| label.parse::<EffectType>().is_ok())
}
