// ABOUTME: McMillan-style training paces from a base pace and race distance band
// ABOUTME: Its fitness metric is the set of equivalent times at the standard distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::race_prediction::RacePredictor;
use crate::physiological_constants::mcmillan::{
    MARATHON_ADJUSTMENT, MID_RACE_MAX_METERS, REPETITION_ADJUSTMENT, SHORT_RACE_MAX_METERS,
};
use runpace_core::errors::ValidationError;
use runpace_core::models::{EquivalentTimes, PaceSeconds, Performance};
use serde::{Deserialize, Serialize};

/// Race distance band selecting the easy, tempo, and interval adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McMillanBand {
    /// Up to 5000 m
    ShortRace,
    /// Up to 10000 m
    MidRace,
    /// Half marathon and longer
    LongRace,
}

impl McMillanBand {
    /// Band for a race distance in meters
    #[must_use]
    pub fn for_distance(distance_meters: f64) -> Self {
        if distance_meters <= SHORT_RACE_MAX_METERS {
            Self::ShortRace
        } else if distance_meters <= MID_RACE_MAX_METERS {
            Self::MidRace
        } else {
            Self::LongRace
        }
    }

    /// Easy pace adjustment
    #[must_use]
    pub const fn easy_adjustment(self) -> f64 {
        match self {
            Self::ShortRace => 1.25,
            Self::MidRace => 1.23,
            Self::LongRace => 1.20,
        }
    }

    /// Tempo (threshold) pace adjustment
    #[must_use]
    pub const fn tempo_adjustment(self) -> f64 {
        match self {
            Self::ShortRace => 0.95,
            Self::MidRace => 0.97,
            Self::LongRace => 1.00,
        }
    }

    /// Interval pace adjustment
    #[must_use]
    pub const fn interval_adjustment(self) -> f64 {
        match self {
            Self::ShortRace => 0.92,
            Self::MidRace => 0.94,
            Self::LongRace => 0.96,
        }
    }
}

/// McMillan running calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct McMillanCalculator;

impl McMillanCalculator {
    /// Training paces in seconds per mile, scaled from an explicit base pace
    ///
    /// The performance only selects the distance band; every pace is
    /// `base_pace_seconds_per_mile x adjustment`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPace` if the base pace is zero,
    /// negative, or not finite.
    pub fn training_pace_seconds(
        performance: &Performance,
        base_pace_seconds_per_mile: f64,
    ) -> Result<PaceSeconds, ValidationError> {
        if !base_pace_seconds_per_mile.is_finite() || base_pace_seconds_per_mile <= 0.0 {
            return Err(ValidationError::invalid_pace(
                base_pace_seconds_per_mile,
                "base pace must be positive",
            ));
        }

        let band = McMillanBand::for_distance(performance.distance_meters());
        let base = base_pace_seconds_per_mile;

        Ok(PaceSeconds {
            easy: base * band.easy_adjustment(),
            marathon: base * MARATHON_ADJUSTMENT,
            threshold: base * band.tempo_adjustment(),
            interval: base * band.interval_adjustment(),
            repetition: base * REPETITION_ADJUSTMENT,
        })
    }

    /// Equivalent times for the performance at every standard distance
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPace` if a projected time cannot be rendered.
    pub fn equivalent_times(performance: &Performance) -> Result<EquivalentTimes, ValidationError> {
        RacePredictor::generate_race_predictions(performance)
    }
}
