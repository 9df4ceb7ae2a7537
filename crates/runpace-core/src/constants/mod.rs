// ABOUTME: Application constants for race distances and unit conversions
// ABOUTME: Shared by the calculators, the input adapter, and the plan generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

/// Standard race distances in meters
pub mod distances {
    /// 5 kilometers
    pub const FIVE_K_METERS: f64 = 5_000.0;
    /// 10 kilometers
    pub const TEN_K_METERS: f64 = 10_000.0;
    /// 15 kilometers
    pub const FIFTEEN_K_METERS: f64 = 15_000.0;
    /// Half marathon, rounded to the whole meter
    pub const HALF_MARATHON_METERS: f64 = 21_097.0;
    /// Marathon
    pub const MARATHON_METERS: f64 = 42_195.0;
}

/// Unit conversion factors
pub mod units {
    /// Meters in one statute mile, used to turn m/s velocities into per-mile paces
    pub const METERS_PER_MILE: f64 = 1_609.34;
    /// Miles in one meter, used to turn a race distance into miles
    pub const MILES_PER_METER: f64 = 0.000_621_371;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: u32 = 3_600;
}

/// Valid ranges for the fitness scores produced by the calculators
pub mod score_bounds {
    /// Lowest VDOT the Daniels calculator reports
    pub const VDOT_MIN: f64 = 30.0;
    /// Highest VDOT the Daniels calculator reports
    pub const VDOT_MAX: f64 = 85.0;
    /// Lowest fitness factor the Riegel calculator reports
    pub const FITNESS_FACTOR_MIN: f64 = 30.0;
    /// Highest fitness factor the Riegel calculator reports
    pub const FITNESS_FACTOR_MAX: f64 = 100.0;
}
