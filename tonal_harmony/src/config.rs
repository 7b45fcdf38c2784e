// Analysis configuration.
//
// Tunable choices for the relationship analyzer, loadable from JSON alongside
// the catalog. Everything has a default matching the historical behavior of
// the report, so an empty `{}` config is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Which scale is used to measure the distance from degree 0 to a chord root
/// found in the *second* scale of a relationship query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootBasis {
    /// Measure the second scale's root against the first scale's steps, as
    /// though it were a degree of the first scale. This is how the report has
    /// always computed it.
    #[default]
    FirstScale,
    /// Measure the second scale's root against the second scale's own steps.
    SecondScale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub second_root_basis: RootBasis,
}

impl AnalysisConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AnalysisConfig::from_json("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.second_root_basis, RootBasis::FirstScale);
    }

    #[test]
    fn test_second_scale_basis_from_json() {
        let config =
            AnalysisConfig::from_json(r#"{"second_root_basis":"second_scale"}"#).unwrap();
        assert_eq!(config.second_root_basis, RootBasis::SecondScale);
    }

    #[test]
    fn test_unknown_basis_rejected() {
        assert!(AnalysisConfig::from_json(r#"{"second_root_basis":"third"}"#).is_err());
    }
}
