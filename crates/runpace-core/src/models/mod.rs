// ABOUTME: Value models shared by the pace calculators and the plan generator
// ABOUTME: Performance, fitness metrics, pace sets, workouts, and training plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

//! Value types with no identity. Everything is constructed fresh per request
//! and returned by value; storing a plan is the caller's job.

mod distance;
mod metric;
mod pace;
mod performance;
mod plan;

pub use distance::StandardDistance;
pub use metric::{EquivalentTime, EquivalentTimes, FitnessMetric};
pub use pace::{PaceName, PaceSeconds, PaceSet};
pub use performance::Performance;
pub use plan::{PlanType, TrainingPlanSpec, TrainingWeek, Workout, WorkoutType};
