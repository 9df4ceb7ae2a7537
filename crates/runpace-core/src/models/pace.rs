// ABOUTME: Named training paces and the formatted pace set returned to callers
// ABOUTME: Keys are fixed: easy, marathon, threshold, interval, repetition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use super::WorkoutType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training pace intensities every calculator produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceName {
    /// Conversational aerobic running
    Easy,
    /// Goal marathon effort
    Marathon,
    /// Comfortably hard, lactate threshold
    Threshold,
    /// VO2max intervals
    Interval,
    /// Short fast repetitions
    Repetition,
}

impl PaceName {
    /// All pace names in display order
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
    ];

    /// Lowercase key used in serialized pace sets
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Marathon => "marathon",
            Self::Threshold => "threshold",
            Self::Interval => "interval",
            Self::Repetition => "repetition",
        }
    }
}

impl fmt::Display for PaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw paces in seconds per mile, before formatting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceSeconds {
    /// Easy pace
    pub easy: f64,
    /// Marathon pace
    pub marathon: f64,
    /// Threshold pace
    pub threshold: f64,
    /// Interval pace
    pub interval: f64,
    /// Repetition pace
    pub repetition: f64,
}

impl PaceSeconds {
    /// Seconds per mile for a named pace
    #[must_use]
    pub const fn get(&self, name: PaceName) -> f64 {
        match name {
            PaceName::Easy => self.easy,
            PaceName::Marathon => self.marathon,
            PaceName::Threshold => self.threshold,
            PaceName::Interval => self.interval,
            PaceName::Repetition => self.repetition,
        }
    }
}

/// Formatted training paces, each `"M:SS"` per mile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceSet {
    /// Easy pace
    pub easy: String,
    /// Marathon pace
    pub marathon: String,
    /// Threshold pace
    pub threshold: String,
    /// Interval pace
    pub interval: String,
    /// Repetition pace
    pub repetition: String,
}

impl PaceSet {
    /// Formatted pace for a named pace
    #[must_use]
    pub fn get(&self, name: PaceName) -> &str {
        match name {
            PaceName::Easy => &self.easy,
            PaceName::Marathon => &self.marathon,
            PaceName::Threshold => &self.threshold,
            PaceName::Interval => &self.interval,
            PaceName::Repetition => &self.repetition,
        }
    }

    /// Target pace for a workout type
    ///
    /// Workout types without a pace of their own (long, recovery) run at easy pace.
    #[must_use]
    pub fn for_workout(&self, workout_type: WorkoutType) -> &str {
        workout_type
            .pace_name()
            .map_or(self.easy.as_str(), |name| self.get(name))
    }

    /// Iterate over `(name, pace)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (PaceName, &str)> + '_ {
        PaceName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}
