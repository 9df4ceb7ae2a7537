// ABOUTME: Race time predictions at the standard distances from a single performance
// ABOUTME: Riegel projection with H:MM:SS formatting for each predicted time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::algorithms::RiegelCalculator;
use crate::pace_formatter::format_time;
use runpace_core::errors::ValidationError;
use runpace_core::models::{EquivalentTime, EquivalentTimes, Performance, StandardDistance};
use tracing::debug;

/// Race performance predictor
#[derive(Debug, Clone, Copy, Default)]
pub struct RacePredictor;

impl RacePredictor {
    /// Predict the time for one standard distance
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPace` if the projected time cannot be formatted.
    pub fn predict(
        performance: &Performance,
        distance: StandardDistance,
    ) -> Result<EquivalentTime, ValidationError> {
        let time_seconds = RiegelCalculator::predict_from(performance, distance.meters());
        Ok(EquivalentTime {
            distance,
            time_seconds,
            formatted: format_time(time_seconds)?,
        })
    }

    /// Generate predictions for 5K, 10K, 15K, Half Marathon, and Marathon
    ///
    /// # Errors
    ///
    /// Fails if any single prediction fails; no partial set is returned.
    pub fn generate_race_predictions(
        performance: &Performance,
    ) -> Result<EquivalentTimes, ValidationError> {
        let times = StandardDistance::ALL
            .iter()
            .map(|&distance| Self::predict(performance, distance))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            time_seconds = performance.time_seconds(),
            distance_meters = performance.distance_meters(),
            predictions = times.len(),
            "Generated race predictions"
        );

        Ok(EquivalentTimes {
            based_on: *performance,
            times,
        })
    }
}
