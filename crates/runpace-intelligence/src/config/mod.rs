// ABOUTME: Intelligence configuration for algorithm selection and plan generation limits
// ABOUTME: Loaded from environment variables over defaults, then validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

//! Intelligence Configuration
//!
//! Configuration is a plain value passed to the components that need it;
//! nothing is cached globally.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export RUNPACE_DEFAULT_ALGORITHM=riegel
//!    export RUNPACE_PLAN_MAX_WEEKS=24
//!    ```
//!
//! 2. Default values (if env vars not set)

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use crate::algorithms::PaceAlgorithm;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable selecting the algorithm used when none is given
pub const DEFAULT_ALGORITHM_ENV: &str = "RUNPACE_DEFAULT_ALGORITHM";

/// Environment variable capping plan length in weeks
pub const PLAN_MAX_WEEKS_ENV: &str = "RUNPACE_PLAN_MAX_WEEKS";

/// Default cap on plan length
pub const DEFAULT_MAX_DURATION_WEEKS: u32 = 52;

/// Largest cap the configuration accepts
pub const MAX_DURATION_WEEKS_LIMIT: u32 = 104;

/// Algorithm selection configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    /// Algorithm used when the caller does not name one
    #[serde(default)]
    pub default_algorithm: PaceAlgorithm,
}

/// Plan generation limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Longest plan, in weeks, the generator will produce
    #[serde(default = "default_max_duration_weeks")]
    pub max_duration_weeks: u32,
}

const fn default_max_duration_weeks() -> u32 {
    DEFAULT_MAX_DURATION_WEEKS
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_duration_weeks: DEFAULT_MAX_DURATION_WEEKS,
        }
    }
}

/// Root intelligence configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Algorithm selection
    #[serde(default)]
    pub algorithms: AlgorithmConfig,
    /// Plan generation limits
    #[serde(default)]
    pub plan: PlanConfig,
}

impl IntelligenceConfig {
    /// Load configuration from environment over defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        Self::apply_env_var(
            DEFAULT_ALGORITHM_ENV,
            &mut config.algorithms.default_algorithm,
        )?;
        Self::apply_env_var(PLAN_MAX_WEEKS_ENV, &mut config.plan.max_duration_weeks)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the plan length cap is outside 1-104
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DURATION_WEEKS_LIMIT).contains(&self.plan.max_duration_weeks) {
            return Err(ConfigError::InvalidRange(
                "plan.max_duration_weeks must be between 1 and 104",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = IntelligenceConfig::default();
        assert_eq!(config.algorithms.default_algorithm, PaceAlgorithm::Daniels);
        assert_eq!(config.plan.max_duration_weeks, 52);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let config = IntelligenceConfig {
            plan: PlanConfig {
                max_duration_weeks: 0,
            },
            ..IntelligenceConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: IntelligenceConfig =
            serde_json::from_str(r#"{"algorithms":{"default_algorithm":"riegel"}}"#).unwrap();
        assert_eq!(config.algorithms.default_algorithm, PaceAlgorithm::Riegel);
        assert_eq!(config.plan, PlanConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var(DEFAULT_ALGORITHM_ENV, "mcmillan");
        env::set_var(PLAN_MAX_WEEKS_ENV, "24");

        let config = IntelligenceConfig::from_env().unwrap();
        assert_eq!(config.algorithms.default_algorithm, PaceAlgorithm::McMillan);
        assert_eq!(config.plan.max_duration_weeks, 24);

        env::remove_var(DEFAULT_ALGORITHM_ENV);
        env::remove_var(PLAN_MAX_WEEKS_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unparseable_values() {
        env::set_var(PLAN_MAX_WEEKS_ENV, "many");
        assert!(matches!(
            IntelligenceConfig::from_env(),
            Err(ConfigError::Parse(_))
        ));
        env::remove_var(PLAN_MAX_WEEKS_ENV);
    }
}
