// ABOUTME: Caller-side input adaptation from runner-entered strings to engine values
// ABOUTME: Parses MM:SS and HH:MM:SS race times and named or custom race distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

//! Input adaptation
//!
//! The engine only accepts validated numbers. This module turns what a runner
//! types (`"1:30:15"`, `"Half Marathon"`) into a [`Performance`].

use runpace_core::errors::ValidationError;
use runpace_core::models::{Performance, StandardDistance};
use serde::{Deserialize, Serialize};

/// Distance tag selecting an explicit meters value
pub const CUSTOM_DISTANCE: &str = "custom";

fn time_component(part: &str, input: &str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidTimeFormat {
        input: input.to_owned(),
    };
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    part.parse().map_err(|_| invalid())
}

/// Parse a race time in `MM:SS` or `HH:MM:SS` form into seconds
///
/// Seconds must be below 60, and so must minutes when hours are given.
///
/// # Errors
///
/// Returns `ValidationError::InvalidTimeFormat` for any other shape,
/// non-numeric parts, or out-of-range components.
pub fn parse_race_time(input: &str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidTimeFormat {
        input: input.to_owned(),
    };

    let parts = input
        .trim()
        .split(':')
        .map(|part| time_component(part, input))
        .collect::<Result<Vec<u32>, _>>()?;

    let (hours, minutes, seconds) = match parts.as_slice() {
        [minutes, seconds] => (0, *minutes, *seconds),
        [hours, minutes, seconds] if *minutes < 60 => (*hours, *minutes, *seconds),
        _ => return Err(invalid()),
    };
    if seconds >= 60 {
        return Err(invalid());
    }

    hours
        .checked_mul(3600)
        .and_then(|total| total.checked_add(minutes.checked_mul(60)?))
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(invalid)
}

/// Parse a per-mile pace in `M:SS` form into seconds
///
/// # Errors
///
/// Returns `ValidationError::InvalidTimeFormat` if the pace is not `M:SS`.
pub fn parse_pace(input: &str) -> Result<f64, ValidationError> {
    if input.trim().split(':').count() != 2 {
        return Err(ValidationError::InvalidTimeFormat {
            input: input.to_owned(),
        });
    }
    parse_race_time(input).map(f64::from)
}

/// Race distance as entered: a standard name or explicit meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceDistance {
    /// One of the named race distances
    Standard(StandardDistance),
    /// Any other distance, in meters
    Custom(f64),
}

impl RaceDistance {
    /// Resolve a distance name, using `custom_meters` for the `custom` tag
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownDistance` for unrecognized names, or
    /// `ValidationError::InvalidPerformance` for `custom` without meters.
    pub fn resolve(name: &str, custom_meters: Option<f64>) -> Result<Self, ValidationError> {
        if name.trim().eq_ignore_ascii_case(CUSTOM_DISTANCE) {
            return custom_meters.map(Self::Custom).ok_or_else(|| {
                ValidationError::invalid_performance("Custom distance requires a meters value")
            });
        }
        name.parse().map(Self::Standard)
    }

    /// Distance in meters
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::Standard(distance) => distance.meters(),
            Self::Custom(meters) => meters,
        }
    }
}

/// Race result as entered by a runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceInput {
    /// `MM:SS` or `HH:MM:SS`
    pub time: String,
    /// Standard distance name or `custom`
    pub distance: String,
    /// Meters, used when `distance` is `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_distance_meters: Option<f64>,
}

impl RaceInput {
    /// Create an input for a named distance
    #[must_use]
    pub fn new(time: impl Into<String>, distance: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            distance: distance.into(),
            custom_distance_meters: None,
        }
    }

    /// Create an input for a custom distance in meters
    #[must_use]
    pub fn custom(time: impl Into<String>, meters: f64) -> Self {
        Self {
            time: time.into(),
            distance: CUSTOM_DISTANCE.to_owned(),
            custom_distance_meters: Some(meters),
        }
    }

    /// Parse into a validated performance
    ///
    /// # Errors
    ///
    /// Returns the parsing error for the time or distance, or
    /// `ValidationError::InvalidPerformance` for a zero time or distance.
    pub fn to_performance(&self) -> Result<Performance, ValidationError> {
        let time_seconds = parse_race_time(&self.time)?;
        let distance = RaceDistance::resolve(&self.distance, self.custom_distance_meters)?;
        Performance::new(time_seconds, distance.meters())
    }
}
