// ABOUTME: `plan` subcommand generating a structured training plan
// ABOUTME: Targets a given VDOT or one derived from a race result with the Daniels formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::helpers::display::print_json;
use runpace_pro::config::AppConfig;
use runpace_pro::input::RaceInput;
use runpace_pro::logging::AppLogger;
use runpace_pro::models::{FitnessMetric, PlanType};
use runpace_pro::{compute_fitness_metric, AppResult, PaceAlgorithm, PlanGenerator};
use std::time::Instant;

/// Fitness level the plan is built for
pub enum Target {
    /// Explicit VDOT
    Vdot(f64),
    /// Race result scored with Daniels VDOT
    Race(RaceInput),
}

impl Target {
    fn metric(&self) -> AppResult<FitnessMetric> {
        match self {
            Self::Vdot(vdot) => Ok(FitnessMetric::Vdot(*vdot)),
            Self::Race(race) => {
                let performance = race.to_performance()?;
                Ok(compute_fitness_metric(
                    PaceAlgorithm::Daniels,
                    performance.time_seconds(),
                    performance.distance_meters(),
                )?)
            }
        }
    }
}

/// Generate the plan and print it
pub fn run(config: &AppConfig, plan_type: &str, target: &Target, weeks: u32) -> AppResult<()> {
    let started = Instant::now();
    let plan_type: PlanType = plan_type.parse()?;
    let metric = target.metric()?;

    let plan = PlanGenerator::new(config.intelligence.plan).create_plan(plan_type, &metric, weeks);
    AppLogger::log_calculation(
        "training_plan",
        PaceAlgorithm::Daniels.name(),
        plan.is_ok(),
        started.elapsed().as_micros(),
    );

    print_json(&plan?)
}
