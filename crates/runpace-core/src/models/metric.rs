// ABOUTME: Fitness metric tagged union produced by the three pace calculators
// ABOUTME: VDOT, Riegel fitness factor, or a McMillan-style equivalent time set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use super::{Performance, StandardDistance};
use serde::{Deserialize, Serialize};

/// Fitness score computed from a race performance
///
/// Each calculator produces and consumes its own variant. Metrics are not
/// interchangeable across algorithms: a fitness factor of 62 says nothing
/// about a VDOT of 62.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FitnessMetric {
    /// Daniels VDOT, 30-85, one decimal place
    Vdot(f64),
    /// Riegel fitness factor relative to an elite 10K, 30-100
    FitnessFactor(f64),
    /// Race times equivalent to the source performance at standard distances
    EquivalentTimes(EquivalentTimes),
}

impl FitnessMetric {
    /// Short name of the metric kind, used in error messages and logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Vdot(_) => "vdot",
            Self::FitnessFactor(_) => "fitness_factor",
            Self::EquivalentTimes(_) => "equivalent_times",
        }
    }

    /// The VDOT value if this is a VDOT metric
    #[must_use]
    pub const fn as_vdot(&self) -> Option<f64> {
        match self {
            Self::Vdot(vdot) => Some(*vdot),
            _ => None,
        }
    }

    /// The fitness factor if this is a Riegel metric
    #[must_use]
    pub const fn as_fitness_factor(&self) -> Option<f64> {
        match self {
            Self::FitnessFactor(factor) => Some(*factor),
            _ => None,
        }
    }
}

/// One projected race time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalentTime {
    /// Target distance
    pub distance: StandardDistance,
    /// Projected time in seconds
    pub time_seconds: f64,
    /// Projected time rendered as `H:MM:SS` or `M:SS`
    pub formatted: String,
}

/// Race times equivalent to a single performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalentTimes {
    /// Performance the projections were made from
    pub based_on: Performance,
    /// One entry per standard distance, shortest first
    pub times: Vec<EquivalentTime>,
}

impl EquivalentTimes {
    /// Look up the projection for a distance
    #[must_use]
    pub fn get(&self, distance: StandardDistance) -> Option<&EquivalentTime> {
        self.times.iter().find(|time| time.distance == distance)
    }
}
