// ABOUTME: Formula coefficients for the Daniels, Riegel, and McMillan pace calculators
// ABOUTME: Fixed calibration tables; nothing here is derived at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

//! Calibration constants used by the pace calculators
//!
//! These values are the engine's configuration: changing any of them changes
//! every pace the engine produces.

/// Linear coefficients `velocity = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCoefficients {
    /// Multiplier on the input
    pub slope: f64,
    /// Constant term
    pub intercept: f64,
}

impl LinearCoefficients {
    /// Evaluate at `x`
    #[must_use]
    pub fn at(self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Jack Daniels' VDOT formula
///
/// Reference: Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
pub mod daniels {
    use super::LinearCoefficients;

    /// VDOT formula coefficient for velocity squared term
    pub const VDOT_A: f64 = 0.000_104;

    /// VDOT formula coefficient for velocity term
    pub const VDOT_B: f64 = 0.182_258;

    /// VDOT formula constant term
    pub const VDOT_C: f64 = -4.6;

    /// Easy pace velocity as a function of VDOT
    pub const EASY_VELOCITY: LinearCoefficients = LinearCoefficients {
        slope: -0.0053,
        intercept: 0.1765,
    };

    /// Marathon pace velocity as a function of VDOT
    pub const MARATHON_VELOCITY: LinearCoefficients = LinearCoefficients {
        slope: -0.0031,
        intercept: 0.2040,
    };

    /// Threshold pace velocity as a function of VDOT
    pub const THRESHOLD_VELOCITY: LinearCoefficients = LinearCoefficients {
        slope: -0.0039,
        intercept: 0.2560,
    };

    /// Interval pace velocity as a function of VDOT
    pub const INTERVAL_VELOCITY: LinearCoefficients = LinearCoefficients {
        slope: -0.0012,
        intercept: 0.2989,
    };

    /// Repetition pace velocity as a function of VDOT
    pub const REPETITION_VELOCITY: LinearCoefficients = LinearCoefficients {
        slope: 0.0010,
        intercept: 0.3176,
    };
}

/// Peter Riegel's power-law endurance model
///
/// Reference: Riegel, P.S. (1981). "Athletic records and human endurance." *American Scientist*, 69(3), 285-290.
pub mod riegel {
    use super::LinearCoefficients;

    /// Fatigue exponent in `T2 = T1 x (D2/D1)^1.06`
    pub const EXPONENT: f64 = 1.06;

    /// Distance every performance is normalized to before scoring (meters)
    pub const REFERENCE_DISTANCE_METERS: f64 = 10_000.0;

    /// Elite 10K reference time (26:00) the fitness factor is scored against
    pub const ELITE_10K_SECONDS: f64 = 1_560.0;

    /// Pace multipliers as a function of the fitness deficit `100 - fitness_factor`
    ///
    /// `slope` applies to the deficit, `intercept` is the multiplier at a
    /// fitness factor of 100.
    pub const EASY_MULTIPLIER: LinearCoefficients = LinearCoefficients {
        slope: 0.002,
        intercept: 1.20,
    };

    /// Marathon pace multiplier
    pub const MARATHON_MULTIPLIER: LinearCoefficients = LinearCoefficients {
        slope: 0.001,
        intercept: 1.05,
    };

    /// Threshold pace multiplier
    pub const THRESHOLD_MULTIPLIER: LinearCoefficients = LinearCoefficients {
        slope: 0.001,
        intercept: 0.98,
    };

    /// Interval pace multiplier
    pub const INTERVAL_MULTIPLIER: LinearCoefficients = LinearCoefficients {
        slope: 0.001,
        intercept: 0.92,
    };

    /// Repetition pace multiplier
    pub const REPETITION_MULTIPLIER: LinearCoefficients = LinearCoefficients {
        slope: 0.001,
        intercept: 0.88,
    };
}

/// McMillan-style pace adjustments by race distance band
pub mod mcmillan {
    /// Upper bound of the short-race band (meters)
    pub const SHORT_RACE_MAX_METERS: f64 = 5_000.0;

    /// Upper bound of the mid-race band (meters)
    pub const MID_RACE_MAX_METERS: f64 = 10_000.0;

    /// Marathon pace adjustment, the same for every band
    pub const MARATHON_ADJUSTMENT: f64 = 1.05;

    /// Repetition pace adjustment, the same for every band
    pub const REPETITION_ADJUSTMENT: f64 = 0.90;
}
