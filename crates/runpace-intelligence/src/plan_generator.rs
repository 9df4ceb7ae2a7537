// ABOUTME: Expands a VDOT into a multi-week plan of structured workouts
// ABOUTME: Validates the metric and duration up front, then repeats the plan type's week template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::algorithms::DanielsCalculator;
use crate::config::PlanConfig;
use crate::pace_formatter::format_paces;
use crate::plan_templates::week_template;
use runpace_core::errors::ValidationError;
use runpace_core::models::{FitnessMetric, PlanType, TrainingPlanSpec, TrainingWeek};
use tracing::debug;

/// Training plan generator
///
/// Plans are driven by a Daniels VDOT: one pace set is computed for the
/// whole plan and every week repeats the plan type's template.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerator {
    config: PlanConfig,
}

impl PlanGenerator {
    /// Create a generator with explicit limits
    #[must_use]
    pub const fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// Create a generator that accepts any positive duration
    #[must_use]
    pub const fn uncapped() -> Self {
        Self::new(PlanConfig {
            max_duration_weeks: u32::MAX,
        })
    }

    /// Limits this generator enforces
    #[must_use]
    pub const fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Generate a complete plan
    ///
    /// # Errors
    ///
    /// - `ValidationError::IncompatibleInput` if the metric is not a VDOT
    /// - `ValidationError::MetricOutOfRange` if the VDOT is outside 30-85
    /// - `ValidationError::InvalidDuration` if `duration_weeks` is 0 or above the configured cap
    /// - `ValidationError::UnsupportedTemplate` for plan types without a template
    pub fn create_plan(
        &self,
        plan_type: PlanType,
        target_metric: &FitnessMetric,
        duration_weeks: u32,
    ) -> Result<TrainingPlanSpec, ValidationError> {
        let vdot = target_metric.as_vdot().ok_or_else(|| {
            ValidationError::incompatible_input("plan generator", "vdot", target_metric.kind())
        })?;
        DanielsCalculator::validate_vdot(vdot)?;

        if duration_weeks == 0 || duration_weeks > self.config.max_duration_weeks {
            return Err(ValidationError::InvalidDuration {
                weeks: duration_weeks,
                max: self.config.max_duration_weeks,
            });
        }

        let template = week_template(plan_type)?;
        let paces = format_paces(&DanielsCalculator::training_pace_seconds(vdot)?)?;

        let weeks = (1..=duration_weeks)
            .map(|week_number| TrainingWeek {
                week_number,
                workouts: template
                    .iter()
                    .map(|day| day.to_workout(week_number, &paces))
                    .collect(),
            })
            .collect();

        debug!(
            plan_type = %plan_type,
            vdot,
            duration_weeks,
            workouts_per_week = template.len(),
            "Generated training plan"
        );

        Ok(TrainingPlanSpec {
            name: plan_type.plan_name().to_owned(),
            plan_type,
            duration_weeks,
            target_metric: target_metric.clone(),
            paces,
            weeks,
        })
    }
}

/// Generate a plan from a plan type tag
///
/// Any positive number of weeks is accepted; callers that need a ceiling
/// use [`PlanGenerator::new`] with a [`PlanConfig`].
///
/// # Errors
///
/// Returns `ValidationError::UnknownAlgorithm` for an unrecognized plan type
/// tag, otherwise see [`PlanGenerator::create_plan`].
pub fn generate_plan(
    plan_type: &str,
    target_metric: &FitnessMetric,
    duration_weeks: u32,
) -> Result<TrainingPlanSpec, ValidationError> {
    let plan_type: PlanType = plan_type.parse()?;
    PlanGenerator::uncapped().create_plan(plan_type, target_metric, duration_weeks)
}
