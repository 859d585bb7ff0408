//! Configuration types for group extraction

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which ANOVA effect the groups are extracted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effects {
    /// Repeated-measures factor
    Within,
    /// Independent-groups factor
    Between,
    /// Combination of within and between factors
    Interaction,
    /// Every effect
    #[default]
    All,
}

impl Effects {
    /// The label used to select this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Within => "within",
            Self::Between => "between",
            Self::Interaction => "interaction",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Effects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effects {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "within" => Ok(Self::Within),
            "between" => Ok(Self::Between),
            "interaction" => Ok(Self::Interaction),
            "all" => Ok(Self::All),
            _ => Err(Error::InvalidArgument(
                "Effects must be: within, between, interaction or all".to_string(),
            )),
        }
    }
}

/// Column selection for multi-group extraction
///
/// ```
/// use prep_core::{Effects, GroupSpec};
///
/// let spec = GroupSpec::new("score").within("time").effects(Effects::Within);
/// assert_eq!(spec.grouping_column().unwrap(), "time");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Dependent variable column
    pub dv: String,
    /// Between-subject factor column
    pub between: Option<String>,
    /// Within-subject factor column
    pub within: Option<String>,
    /// Effect the groups are extracted for
    pub effects: Effects,
}

impl GroupSpec {
    /// Create a spec for the given dependent variable, with `effects = all`
    pub fn new(dv: impl Into<String>) -> Self {
        Self {
            dv: dv.into(),
            ..Self::default()
        }
    }

    /// Set the between-subject factor column
    pub fn between(mut self, column: impl Into<String>) -> Self {
        self.between = Some(column.into());
        self
    }

    /// Set the within-subject factor column
    pub fn within(mut self, column: impl Into<String>) -> Self {
        self.within = Some(column.into());
        self
    }

    /// Set the effect the groups are extracted for
    pub fn effects(mut self, effects: Effects) -> Self {
        self.effects = effects;
        self
    }

    /// Check that the columns required by `effects` are present
    pub fn validate(&self) -> Result<()> {
        if self.dv.is_empty() {
            return Err(Error::InvalidArgument(
                "DV and data must be specified".to_string(),
            ));
        }
        match self.effects {
            Effects::Within if self.within.is_none() => Err(Error::InvalidArgument(
                "within must be specified when effects=within".to_string(),
            )),
            Effects::Between if self.between.is_none() => Err(Error::InvalidArgument(
                "between must be specified when effects=between".to_string(),
            )),
            Effects::Interaction if self.within.is_none() || self.between.is_none() => {
                Err(Error::InvalidArgument(
                    "within and between must be specified when effects=interaction".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Validate and return the column to group on.
    ///
    /// `interaction` and `all` have no single grouping column and fail with
    /// [`Error::Unsupported`] once their arguments validate.
    pub fn grouping_column(&self) -> Result<&str> {
        self.validate()?;
        match self.effects {
            Effects::Within => Ok(self.within.as_deref().unwrap_or_default()),
            Effects::Between => Ok(self.between.as_deref().unwrap_or_default()),
            Effects::Interaction | Effects::All => Err(Error::Unsupported(format!(
                "group extraction for effects={}",
                self.effects
            ))),
        }
    }
}
