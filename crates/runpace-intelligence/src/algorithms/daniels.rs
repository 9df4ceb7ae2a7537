// ABOUTME: Jack Daniels VDOT scoring and VDOT-indexed training pace velocities
// ABOUTME: VDOT is rounded to one decimal and clamped to the 30-85 range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::physiological_constants::daniels::{
    EASY_VELOCITY, INTERVAL_VELOCITY, MARATHON_VELOCITY, REPETITION_VELOCITY, THRESHOLD_VELOCITY,
    VDOT_A, VDOT_B, VDOT_C,
};
use crate::physiological_constants::LinearCoefficients;
use runpace_core::constants::score_bounds::{VDOT_MAX, VDOT_MIN};
use runpace_core::constants::units::METERS_PER_MILE;
use runpace_core::errors::ValidationError;
use runpace_core::models::{PaceSeconds, Performance};
use tracing::warn;

/// Jack Daniels' VDOT calculator
///
/// Formula: `VDOT = -4.6 + 0.182258 x v + 0.000104 x v²`, with `v` the race
/// velocity in meters per second.
///
/// # Scientific References
///
/// - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
#[derive(Debug, Clone, Copy, Default)]
pub struct DanielsCalculator;

impl DanielsCalculator {
    /// Score a performance, rounded to one decimal and clamped to `[30, 85]`
    #[must_use]
    pub fn calculate_vdot(performance: &Performance) -> f64 {
        let velocity = performance.velocity_mps();
        let raw = (VDOT_A * velocity).mul_add(velocity, VDOT_B.mul_add(velocity, VDOT_C));
        let rounded = (raw * 10.0).round() / 10.0;
        let vdot = rounded.clamp(VDOT_MIN, VDOT_MAX);

        if (vdot - rounded).abs() > f64::EPSILON {
            warn!(
                raw_vdot = raw,
                clamped_vdot = vdot,
                "VDOT saturated at range bound"
            );
        }

        vdot
    }

    /// Training paces in seconds per mile for a VDOT
    ///
    /// Each pace is `1609.34 / |velocity|` with the velocity taken from the
    /// linear VDOT coefficients.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MetricOutOfRange` if the VDOT is outside
    /// `[30, 85]`, or `ValidationError::InvalidPace` if a velocity is zero.
    pub fn training_pace_seconds(vdot: f64) -> Result<PaceSeconds, ValidationError> {
        Self::validate_vdot(vdot)?;

        Ok(PaceSeconds {
            easy: Self::pace_at(EASY_VELOCITY, vdot)?,
            marathon: Self::pace_at(MARATHON_VELOCITY, vdot)?,
            threshold: Self::pace_at(THRESHOLD_VELOCITY, vdot)?,
            interval: Self::pace_at(INTERVAL_VELOCITY, vdot)?,
            repetition: Self::pace_at(REPETITION_VELOCITY, vdot)?,
        })
    }

    /// Check a VDOT lies in the range the calculator produces
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MetricOutOfRange` for values outside `[30, 85]`
    /// or non-finite values.
    pub fn validate_vdot(vdot: f64) -> Result<(), ValidationError> {
        if vdot.is_finite() && (VDOT_MIN..=VDOT_MAX).contains(&vdot) {
            return Ok(());
        }
        Err(ValidationError::MetricOutOfRange {
            metric: "VDOT",
            value: vdot,
            min: VDOT_MIN,
            max: VDOT_MAX,
        })
    }

    fn pace_at(coefficients: LinearCoefficients, vdot: f64) -> Result<f64, ValidationError> {
        // Several lines cross zero inside 30-85; the sign is dropped so every pace stays renderable
        let speed = coefficients.at(vdot).abs();
        if speed <= f64::EPSILON || !speed.is_finite() {
            return Err(ValidationError::invalid_pace(
                speed,
                "training velocity is zero at this VDOT",
            ));
        }
        Ok(METERS_PER_MILE / speed)
    }
}
