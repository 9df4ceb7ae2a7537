// ABOUTME: Training plan value types: plan types, workout types, workouts, and weeks
// ABOUTME: Produced fresh by the plan generator and handed to the caller by value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use super::{FitnessMetric, PaceName, PaceSet};
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a single workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Easy run
    Easy,
    /// Marathon pace run
    Marathon,
    /// Threshold/tempo run
    Threshold,
    /// Interval training
    Interval,
    /// Repetition work
    Repetition,
    /// Long run
    Long,
    /// Recovery run
    Recovery,
}

impl WorkoutType {
    /// The pace this workout is run at, if it has one of its own
    #[must_use]
    pub const fn pace_name(self) -> Option<PaceName> {
        match self {
            Self::Easy => Some(PaceName::Easy),
            Self::Marathon => Some(PaceName::Marathon),
            Self::Threshold => Some(PaceName::Threshold),
            Self::Interval => Some(PaceName::Interval),
            Self::Repetition => Some(PaceName::Repetition),
            Self::Long | Self::Recovery => None,
        }
    }

    /// Lowercase tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Marathon => "marathon",
            Self::Threshold => "threshold",
            Self::Interval => "interval",
            Self::Repetition => "repetition",
            Self::Long => "long",
            Self::Recovery => "recovery",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy Run",
            Self::Marathon => "Marathon Pace",
            Self::Threshold => "Threshold/Tempo",
            Self::Interval => "Interval Training",
            Self::Repetition => "Repetition",
            Self::Long => "Long Run",
            Self::Recovery => "Recovery Run",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Race a training plan prepares for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanType {
    /// 5K training
    #[serde(rename = "5k")]
    FiveK,
    /// 10K training
    #[serde(rename = "10k")]
    TenK,
    /// Half marathon training
    #[serde(rename = "half_marathon")]
    HalfMarathon,
    /// Marathon training
    #[serde(rename = "marathon")]
    Marathon,
    /// Custom plan, built by hand rather than from a template
    #[serde(rename = "custom")]
    Custom,
}

const VALID_PLAN_TYPES: &str = "5k, 10k, half_marathon, marathon, custom";

impl PlanType {
    /// Tag as accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveK => "5k",
            Self::TenK => "10k",
            Self::HalfMarathon => "half_marathon",
            Self::Marathon => "marathon",
            Self::Custom => "custom",
        }
    }

    /// Display name of a plan of this type
    #[must_use]
    pub const fn plan_name(self) -> &'static str {
        match self {
            Self::FiveK => "5K Training Plan",
            Self::TenK => "10K Training Plan",
            Self::HalfMarathon => "Half Marathon Training Plan",
            Self::Marathon => "Marathon Training Plan",
            Self::Custom => "Custom Training Plan",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "half_marathon" | "half-marathon" | "half marathon" => Ok(Self::HalfMarathon),
            "marathon" => Ok(Self::Marathon),
            "custom" => Ok(Self::Custom),
            _ => Err(ValidationError::unknown_algorithm(
                "plan type",
                s,
                VALID_PLAN_TYPES,
            )),
        }
    }
}

/// A single scheduled workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Week number, starting at 1
    pub week: u32,
    /// Day of the week, 1-7
    pub day: u32,
    /// Workout category
    pub workout_type: WorkoutType,
    /// What to run
    pub description: String,
    /// Planned distance in miles
    pub distance_miles: f64,
    /// Target pace, `"M:SS"` per mile
    pub target_pace: String,
}

/// One week of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingWeek {
    /// Week number, starting at 1
    pub week_number: u32,
    /// Workouts ordered by day
    pub workouts: Vec<Workout>,
}

impl TrainingWeek {
    /// Total planned mileage for the week
    #[must_use]
    pub fn total_distance_miles(&self) -> f64 {
        self.workouts.iter().map(|w| w.distance_miles).sum()
    }
}

/// A complete generated training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlanSpec {
    /// Display name, e.g. "5K Training Plan"
    pub name: String,
    /// Race the plan targets
    pub plan_type: PlanType,
    /// Number of weeks
    pub duration_weeks: u32,
    /// Fitness the paces were derived from
    pub target_metric: FitnessMetric,
    /// Paces assigned to the workouts
    pub paces: PaceSet,
    /// Weeks in order
    pub weeks: Vec<TrainingWeek>,
}

impl TrainingPlanSpec {
    /// Total planned mileage across all weeks
    #[must_use]
    pub fn total_distance_miles(&self) -> f64 {
        self.weeks.iter().map(TrainingWeek::total_distance_miles).sum()
    }

    /// All workouts in schedule order
    pub fn workouts(&self) -> impl Iterator<Item = &Workout> + '_ {
        self.weeks.iter().flat_map(|week| week.workouts.iter())
    }
}
