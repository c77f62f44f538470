//! Top-level patnet configuration.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AssemblyConfig, EdgeConfig, FilterConfig, IdentityConfig, OrgConfig, WindowConfig};
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigurationError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PATNET_*`)
/// 2. Config file passed to [`PatnetConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatnetConfig {
    pub org: OrgConfig,
    pub identity: IdentityConfig,
    pub edges: EdgeConfig,
    pub window: WindowConfig,
    pub filter: FilterConfig,
    pub assembly: AssemblyConfig,
}

impl PatnetConfig {
    /// Load configuration: optional TOML file, then `PATNET_*` overrides,
    /// then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigurationError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigurationError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigurationError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigurationError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PATNET_*` environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigurationError> {
        if let Ok(val) = std::env::var("PATNET_MERGE_THRESHOLD") {
            self.identity.merge_threshold = parse_env("PATNET_MERGE_THRESHOLD", &val)?;
        }
        if let Ok(val) = std::env::var("PATNET_MAX_TEAM_SIZE") {
            self.edges.max_team_size = Some(parse_env("PATNET_MAX_TEAM_SIZE", &val)?);
        }
        if let Ok(val) = std::env::var("PATNET_CONTEXTUAL_INFERENCE") {
            self.org.contextual_inference = parse_env("PATNET_CONTEXTUAL_INFERENCE", &val)?;
        }
        if let Ok(val) = std::env::var("PATNET_WINDOW_YEARS") {
            let years = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_env("PATNET_WINDOW_YEARS", s))
                .collect::<Result<Vec<i32>, _>>()?;
            self.window.years = Some(years);
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let id = &self.identity;
        for (field, value) in [
            ("identity.merge_threshold", id.merge_threshold),
            ("identity.ambiguity_margin", id.ambiguity_margin),
            ("identity.min_name_similarity", id.min_name_similarity),
            ("identity.initial_match_penalty", id.initial_match_penalty),
            ("identity.middle_conflict_penalty", id.middle_conflict_penalty),
            ("org.inference_dominance", self.org.inference_dominance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }

        let weights = [id.name_weight, id.affiliation_weight, id.coinventor_weight];
        if weights.iter().any(|w| *w < 0.0) {
            return Err(invalid("identity.*_weight", "weights must be non-negative"));
        }
        if (weights.iter().sum::<f64>() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(invalid("identity.*_weight", "weights must sum to 1.0"));
        }
        if id.affiliation_window_days < 0 {
            return Err(invalid(
                "identity.affiliation_window_days",
                "must not be negative",
            ));
        }

        if self.org.inference_window == 0 {
            return Err(invalid("org.inference_window", "must be greater than 0"));
        }

        if let Some(cap) = self.edges.max_team_size {
            if cap < 2 {
                return Err(invalid("edges.max_team_size", "must be at least 2"));
            }
        }

        if let Some(ref years) = self.window.years {
            if years.is_empty() {
                return Err(invalid("window.years", "explicit window must not be empty"));
            }
            let unique: BTreeSet<i32> = years.iter().copied().collect();
            if unique.len() != years.len() {
                return Err(invalid("window.years", "years must be unique"));
            }
        }

        if let (Some(start), Some(end)) = (self.filter.start_date, self.filter.end_date) {
            if start > end {
                return Err(invalid("filter.start_date", "must not be after end_date"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigurationError {
    ConfigurationError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, val: &str) -> Result<T, ConfigurationError> {
    val.trim()
        .parse()
        .map_err(|_| invalid(key, &format!("cannot parse '{val}'")))
}
