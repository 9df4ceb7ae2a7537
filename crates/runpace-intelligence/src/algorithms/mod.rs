// ABOUTME: Algorithm selection for fitness scoring with enum dispatch over the calculators
// ABOUTME: Parses algorithm tags and computes the fitness metric each algorithm produces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

//! Algorithm Selection Module
//!
//! Fitness scoring is a closed set of algorithms selected by tag. Each
//! algorithm produces its own kind of [`FitnessMetric`]; the metrics are not
//! interchangeable.
//!
//! # Example
//!
//! ```rust,no_run
//! use runpace_intelligence::algorithms::{compute_fitness_metric, PaceAlgorithm};
//!
//! let algorithm: PaceAlgorithm = "riegel".parse()?;
//! let metric = compute_fitness_metric(algorithm, 1200, 5000.0)?;
//! # Ok::<(), runpace_core::ValidationError>(())
//! ```

pub mod daniels;
pub mod mcmillan;
pub mod riegel;

pub use daniels::DanielsCalculator;
pub use mcmillan::{McMillanBand, McMillanCalculator};
pub use riegel::RiegelCalculator;

use runpace_core::errors::ValidationError;
use runpace_core::models::{FitnessMetric, Performance};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const VALID_ALGORITHMS: &str = "daniels, riegel, mcmillan";

/// Fitness scoring algorithm selection
///
/// - `Daniels`: Jack Daniels' VDOT (`-4.6 + 0.182258v + 0.000104v²`)
/// - `Riegel`: fitness factor from a 10K projection (`T2 = T1 x (D2/D1)^1.06`)
/// - `McMillan`: equivalent times and distance-band pace adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaceAlgorithm {
    /// Jack Daniels' VDOT formula
    #[default]
    Daniels,
    /// Riegel power-law fitness factor
    Riegel,
    /// McMillan equivalent times
    McMillan,
}

impl PaceAlgorithm {
    /// All algorithms
    pub const ALL: [Self; 3] = [Self::Daniels, Self::Riegel, Self::McMillan];

    /// Get algorithm name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Daniels => "daniels",
            Self::Riegel => "riegel",
            Self::McMillan => "mcmillan",
        }
    }

    /// Method label shown to runners
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daniels => "Daniels VDOT",
            Self::Riegel => "Riegel Formula",
            Self::McMillan => "McMillan",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Daniels => "Jack Daniels VDOT (VDOT = -4.6 + 0.182258xv + 0.000104xv²)",
            Self::Riegel => "Riegel fitness factor (elite 10K time over 10K equivalent)",
            Self::McMillan => "McMillan equivalent times with distance-band pace adjustments",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Daniels => "VDOT = -4.6 + 0.182258xv + 0.000104xv²",
            Self::Riegel => "FF = 1560 / (T x (10000/D)^1.06) x 100",
            Self::McMillan => "pace = base x band adjustment",
        }
    }

    /// Kind of [`FitnessMetric`] this algorithm produces
    #[must_use]
    pub const fn metric_kind(self) -> &'static str {
        match self {
            Self::Daniels => "vdot",
            Self::Riegel => "fitness_factor",
            Self::McMillan => "equivalent_times",
        }
    }
}

impl fmt::Display for PaceAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaceAlgorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daniels" | "daniels_vdot" | "vdot" => Ok(Self::Daniels),
            "riegel" => Ok(Self::Riegel),
            "mcmillan" => Ok(Self::McMillan),
            _ => Err(ValidationError::unknown_algorithm(
                "algorithm",
                s,
                VALID_ALGORITHMS,
            )),
        }
    }
}

/// Score a race performance with the selected algorithm
///
/// # Errors
///
/// Returns `ValidationError::InvalidPerformance` if the time is zero or the
/// distance is not positive.
pub fn compute_fitness_metric(
    algorithm: PaceAlgorithm,
    time_seconds: u32,
    distance_meters: f64,
) -> Result<FitnessMetric, ValidationError> {
    let performance = Performance::new(time_seconds, distance_meters)?;

    let metric = match algorithm {
        PaceAlgorithm::Daniels => FitnessMetric::Vdot(DanielsCalculator::calculate_vdot(&performance)),
        PaceAlgorithm::Riegel => {
            FitnessMetric::FitnessFactor(RiegelCalculator::fitness_factor(&performance))
        }
        PaceAlgorithm::McMillan => {
            FitnessMetric::EquivalentTimes(McMillanCalculator::equivalent_times(&performance)?)
        }
    };

    debug!(
        algorithm = algorithm.name(),
        time_seconds,
        distance_meters,
        metric = metric.kind(),
        "Computed fitness metric"
    );

    Ok(metric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("daniels".parse::<PaceAlgorithm>(), Ok(PaceAlgorithm::Daniels));
        assert_eq!("VDOT".parse::<PaceAlgorithm>(), Ok(PaceAlgorithm::Daniels));
        assert_eq!(
            "daniels_vdot".parse::<PaceAlgorithm>(),
            Ok(PaceAlgorithm::Daniels)
        );
        assert_eq!("Riegel".parse::<PaceAlgorithm>(), Ok(PaceAlgorithm::Riegel));
        assert_eq!("mcmillan".parse::<PaceAlgorithm>(), Ok(PaceAlgorithm::McMillan));
    }

    #[test]
    fn test_unknown_algorithm() {
        let error = "cameron".parse::<PaceAlgorithm>().unwrap_err();
        assert_eq!(
            error,
            ValidationError::UnknownAlgorithm {
                kind: "algorithm",
                tag: "cameron".to_owned(),
                valid: VALID_ALGORITHMS,
            }
        );
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for algorithm in PaceAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<PaceAlgorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_descriptions_carry_the_formula() {
        for algorithm in PaceAlgorithm::ALL {
            assert!(!algorithm.formula().is_empty());
            assert!(!algorithm.description().is_empty());
        }
        assert!(PaceAlgorithm::Daniels
            .description()
            .contains(PaceAlgorithm::Daniels.formula()));
        assert!(PaceAlgorithm::Riegel.formula().starts_with("FF ="));
    }

    #[test]
    fn test_metric_kind_matches_computed_metric() {
        for algorithm in PaceAlgorithm::ALL {
            let metric = compute_fitness_metric(algorithm, 2400, 10_000.0).unwrap();
            assert_eq!(metric.kind(), algorithm.metric_kind());
        }
    }

    #[test]
    fn test_zero_inputs_rejected() {
        for algorithm in PaceAlgorithm::ALL {
            assert!(matches!(
                compute_fitness_metric(algorithm, 0, 5000.0),
                Err(ValidationError::InvalidPerformance { .. })
            ));
            assert!(matches!(
                compute_fitness_metric(algorithm, 1200, 0.0),
                Err(ValidationError::InvalidPerformance { .. })
            ));
        }
    }
}
