// ABOUTME: Race performance value type with validating constructor
// ABOUTME: The only way into the calculators, so time and distance are always positive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::constants::units::MILES_PER_METER;
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// A single race result: how long it took to cover a distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPerformance")]
pub struct Performance {
    time_seconds: u32,
    distance_meters: f64,
}

/// Unvalidated wire shape, checked through [`Performance::new`] on deserialize
#[derive(Deserialize)]
struct RawPerformance {
    time_seconds: u32,
    distance_meters: f64,
}

impl TryFrom<RawPerformance> for Performance {
    type Error = ValidationError;

    fn try_from(raw: RawPerformance) -> Result<Self, Self::Error> {
        Self::new(raw.time_seconds, raw.distance_meters)
    }
}

impl Performance {
    /// Create a validated performance
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPerformance` if the time is zero or the
    /// distance is zero, negative, or not finite.
    pub fn new(time_seconds: u32, distance_meters: f64) -> Result<Self, ValidationError> {
        if time_seconds == 0 {
            return Err(ValidationError::invalid_performance(
                "Time must be positive",
            ));
        }

        if !distance_meters.is_finite() || distance_meters <= 0.0 {
            return Err(ValidationError::invalid_performance(format!(
                "Distance must be positive, got {distance_meters} m"
            )));
        }

        Ok(Self {
            time_seconds,
            distance_meters,
        })
    }

    /// Race time in whole seconds
    #[must_use]
    pub const fn time_seconds(&self) -> u32 {
        self.time_seconds
    }

    /// Race time as a float for formula work
    #[must_use]
    pub fn time_seconds_f64(&self) -> f64 {
        f64::from(self.time_seconds)
    }

    /// Race distance in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Average velocity in meters per second
    #[must_use]
    pub fn velocity_mps(&self) -> f64 {
        self.distance_meters / self.time_seconds_f64()
    }

    /// Average pace over the race in seconds per mile
    #[must_use]
    pub fn pace_seconds_per_mile(&self) -> f64 {
        self.time_seconds_f64() / (self.distance_meters * MILES_PER_METER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_time_and_distance() {
        assert!(matches!(
            Performance::new(0, 5_000.0),
            Err(ValidationError::InvalidPerformance { .. })
        ));
        assert!(matches!(
            Performance::new(1_200, 0.0),
            Err(ValidationError::InvalidPerformance { .. })
        ));
        assert!(Performance::new(1_200, -5.0).is_err());
        assert!(Performance::new(1_200, f64::NAN).is_err());
        assert!(Performance::new(1_200, f64::INFINITY).is_err());
    }

    #[test]
    fn test_pace_per_mile() {
        let performance = Performance::new(1_200, 5_000.0).unwrap();
        // 20:00 5K is roughly 6:26 per mile
        let pace = performance.pace_seconds_per_mile();
        assert!((pace - 386.24).abs() < 0.01, "got {pace}");
        assert!((performance.velocity_mps() - 4.1667).abs() < 0.001);
    }

    #[test]
    fn test_deserialize_validates() {
        let parsed: Result<Performance, _> =
            serde_json::from_str(r#"{"time_seconds":0,"distance_meters":5000.0}"#);
        assert!(parsed.is_err());

        let parsed: Performance =
            serde_json::from_str(r#"{"time_seconds":1200,"distance_meters":5000.0}"#).unwrap();
        assert_eq!(parsed.time_seconds(), 1_200);
    }
}
