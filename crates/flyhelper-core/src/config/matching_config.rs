//! Exception matching configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How the end of an exception match is anchored inside a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryRule {
    /// A match ending one character before the candidate's end also counts
    /// as end-anchored, whatever that last character is.
    #[default]
    Legacy,
    /// The match must end at the candidate's end or before a
    /// non-alphanumeric character.
    Strict,
}

impl BoundaryRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for BoundaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(Self::Legacy),
            "strict" => Ok(Self::Strict),
            other => Err(ConfigError::InvalidValue {
                field: "matching.exception_boundary".to_string(),
                message: format!("must be 'legacy' or 'strict', got '{other}'"),
            }),
        }
    }
}

/// Configuration for candidate filtering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchingConfig {
    /// Exception end-boundary rule: "legacy" or "strict". Default: "legacy".
    pub exception_boundary: Option<String>,
}

impl MatchingConfig {
    /// Returns the parsed boundary rule, defaulting to `legacy`.
    pub fn effective_boundary_rule(&self) -> Result<BoundaryRule, ConfigError> {
        match self.exception_boundary.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(BoundaryRule::Legacy),
        }
    }
}
