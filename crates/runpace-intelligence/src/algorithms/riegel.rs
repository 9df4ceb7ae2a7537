// ABOUTME: Peter Riegel power-law race prediction and fitness factor scoring
// ABOUTME: Normalizes performances to 10K and scores them against an elite reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::physiological_constants::riegel::{
    EASY_MULTIPLIER, ELITE_10K_SECONDS, EXPONENT, INTERVAL_MULTIPLIER, MARATHON_MULTIPLIER,
    REFERENCE_DISTANCE_METERS, REPETITION_MULTIPLIER, THRESHOLD_MULTIPLIER,
};
use runpace_core::constants::score_bounds::{FITNESS_FACTOR_MAX, FITNESS_FACTOR_MIN};
use runpace_core::errors::ValidationError;
use runpace_core::models::{PaceSeconds, Performance};

/// Riegel power-law calculator
///
/// Formula: `T2 = T1 x (D2/D1)^1.06`
///
/// # Scientific References
///
/// - Riegel, P.S. (1981). "Athletic records and human endurance." *American Scientist*, 69(3), 285-290.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiegelCalculator;

impl RiegelCalculator {
    /// Predict the time for `target_distance` from a known result
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPerformance` if any argument is zero,
    /// negative, or not finite.
    pub fn predict_time(
        known_time: f64,
        known_distance: f64,
        target_distance: f64,
    ) -> Result<f64, ValidationError> {
        for (value, name) in [
            (known_time, "Known time"),
            (known_distance, "Known distance"),
            (target_distance, "Target distance"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::invalid_performance(format!(
                    "{name} must be positive"
                )));
            }
        }
        Ok(Self::project(known_time, known_distance, target_distance))
    }

    /// Predict a performance's time at another distance
    #[must_use]
    pub fn predict_from(performance: &Performance, target_distance: f64) -> f64 {
        Self::project(
            performance.time_seconds_f64(),
            performance.distance_meters(),
            target_distance,
        )
    }

    /// Fitness factor: elite 10K time over the performance's 10K equivalent, as a percentage
    ///
    /// Clamped to `[30, 100]`; not rounded.
    #[must_use]
    pub fn fitness_factor(performance: &Performance) -> f64 {
        let time_10k = Self::predict_from(performance, REFERENCE_DISTANCE_METERS);
        (ELITE_10K_SECONDS / time_10k * 100.0).clamp(FITNESS_FACTOR_MIN, FITNESS_FACTOR_MAX)
    }

    /// Training paces in seconds per mile
    ///
    /// The race's per-mile pace is scaled by a multiplier that grows with the
    /// fitness deficit `100 - fitness_factor`.
    #[must_use]
    pub fn training_pace_seconds(performance: &Performance) -> PaceSeconds {
        let deficit = FITNESS_FACTOR_MAX - Self::fitness_factor(performance);
        let base_pace = performance.pace_seconds_per_mile();

        PaceSeconds {
            easy: base_pace * EASY_MULTIPLIER.at(deficit),
            marathon: base_pace * MARATHON_MULTIPLIER.at(deficit),
            threshold: base_pace * THRESHOLD_MULTIPLIER.at(deficit),
            interval: base_pace * INTERVAL_MULTIPLIER.at(deficit),
            repetition: base_pace * REPETITION_MULTIPLIER.at(deficit),
        }
    }

    fn project(known_time: f64, known_distance: f64, target_distance: f64) -> f64 {
        known_time * (target_distance / known_distance).powf(EXPONENT)
    }
}
