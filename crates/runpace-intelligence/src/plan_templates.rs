// ABOUTME: Fixed seven-day week templates for each race plan type
// ABOUTME: Descriptions carry a pace placeholder filled in with the workout's target pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use runpace_core::errors::ValidationError;
use runpace_core::models::{PaceSet, PlanType, Workout, WorkoutType};

/// Placeholder replaced by the target pace in template descriptions
pub const PACE_PLACEHOLDER: &str = "{pace}";

/// One day of a week template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateDay {
    /// Day of the week, 1-7
    pub day: u32,
    /// Workout category
    pub workout_type: WorkoutType,
    /// Description with a `{pace}` placeholder
    pub description: &'static str,
    /// Planned distance in miles
    pub distance_miles: f64,
}

impl TemplateDay {
    const fn new(
        day: u32,
        workout_type: WorkoutType,
        description: &'static str,
        distance_miles: f64,
    ) -> Self {
        Self {
            day,
            workout_type,
            description,
            distance_miles,
        }
    }

    /// Instantiate this day for a week, assigning its pace from the set
    #[must_use]
    pub fn to_workout(&self, week: u32, paces: &PaceSet) -> Workout {
        let target_pace = paces.for_workout(self.workout_type);
        Workout {
            week,
            day: self.day,
            workout_type: self.workout_type,
            description: self.description.replace(PACE_PLACEHOLDER, target_pace),
            distance_miles: self.distance_miles,
            target_pace: target_pace.to_owned(),
        }
    }
}

const FIVE_K_WEEK: [TemplateDay; 7] = [
    TemplateDay::new(1, WorkoutType::Easy, "Easy run 4-6 miles at {pace} pace", 5.0),
    TemplateDay::new(
        2,
        WorkoutType::Interval,
        "5x1000m at {pace} pace with 400m jog recovery",
        6.0,
    ),
    TemplateDay::new(3, WorkoutType::Easy, "Easy run 3-4 miles at {pace} pace", 3.5),
    TemplateDay::new(4, WorkoutType::Threshold, "20 minutes at {pace} pace", 4.0),
    TemplateDay::new(5, WorkoutType::Easy, "Easy run 3-4 miles at {pace} pace", 3.5),
    TemplateDay::new(
        6,
        WorkoutType::Repetition,
        "8x200m at {pace} pace with 200m walk",
        4.0,
    ),
    TemplateDay::new(7, WorkoutType::Long, "Long run at {pace} pace", 8.0),
];

const TEN_K_WEEK: [TemplateDay; 7] = [
    TemplateDay::new(1, WorkoutType::Easy, "Easy run 4-6 miles at {pace} pace", 5.0),
    TemplateDay::new(
        2,
        WorkoutType::Interval,
        "6x1000m at {pace} pace with 400m jog recovery",
        7.0,
    ),
    TemplateDay::new(3, WorkoutType::Easy, "Easy run 4 miles at {pace} pace", 4.0),
    TemplateDay::new(4, WorkoutType::Threshold, "25 minutes at {pace} pace", 5.0),
    TemplateDay::new(5, WorkoutType::Recovery, "Recovery run 3 miles at {pace} pace", 3.0),
    TemplateDay::new(
        6,
        WorkoutType::Repetition,
        "10x200m at {pace} pace with 200m jog",
        5.0,
    ),
    TemplateDay::new(7, WorkoutType::Long, "Long run at {pace} pace", 10.0),
];

const HALF_MARATHON_WEEK: [TemplateDay; 7] = [
    TemplateDay::new(1, WorkoutType::Easy, "Easy run 5 miles at {pace} pace", 5.0),
    TemplateDay::new(
        2,
        WorkoutType::Threshold,
        "2x15 minutes at {pace} pace with 3 minute jog",
        7.0,
    ),
    TemplateDay::new(3, WorkoutType::Easy, "Easy run 5 miles at {pace} pace", 5.0),
    TemplateDay::new(
        4,
        WorkoutType::Interval,
        "5x1200m at {pace} pace with 400m jog recovery",
        7.0,
    ),
    TemplateDay::new(5, WorkoutType::Recovery, "Recovery run 3 miles at {pace} pace", 3.0),
    TemplateDay::new(6, WorkoutType::Marathon, "6 steady miles at {pace} pace", 6.0),
    TemplateDay::new(7, WorkoutType::Long, "Long run at {pace} pace", 12.0),
];

const MARATHON_WEEK: [TemplateDay; 7] = [
    TemplateDay::new(1, WorkoutType::Recovery, "Recovery run 4 miles at {pace} pace", 4.0),
    TemplateDay::new(
        2,
        WorkoutType::Threshold,
        "3x2 miles at {pace} pace with 2 minute jog",
        8.0,
    ),
    TemplateDay::new(3, WorkoutType::Easy, "Easy run 6 miles at {pace} pace", 6.0),
    TemplateDay::new(4, WorkoutType::Marathon, "10 miles at {pace} pace", 10.0),
    TemplateDay::new(5, WorkoutType::Recovery, "Recovery run 4 miles at {pace} pace", 4.0),
    TemplateDay::new(6, WorkoutType::Easy, "Easy run 5 miles at {pace} pace", 5.0),
    TemplateDay::new(7, WorkoutType::Long, "Long run at {pace} pace", 16.0),
];

/// Week template for a plan type
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedTemplate` for `custom` plans.
pub fn week_template(plan_type: PlanType) -> Result<&'static [TemplateDay], ValidationError> {
    match plan_type {
        PlanType::FiveK => Ok(&FIVE_K_WEEK),
        PlanType::TenK => Ok(&TEN_K_WEEK),
        PlanType::HalfMarathon => Ok(&HALF_MARATHON_WEEK),
        PlanType::Marathon => Ok(&MARATHON_WEEK),
        PlanType::Custom => Err(ValidationError::unsupported_template(plan_type.as_str())),
    }
}
