// ABOUTME: `paces` subcommand scoring a race result and deriving the five training paces
// ABOUTME: Resolves the algorithm from the flag or configuration and prints a JSON report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::helpers::display::print_json;
use runpace_pro::config::AppConfig;
use runpace_pro::input::{parse_pace, RaceInput};
use runpace_pro::logging::AppLogger;
use runpace_pro::models::{FitnessMetric, PaceSet, Performance};
use runpace_pro::{
    compute_fitness_metric, derive_training_paces, AppResult, PaceAlgorithm, PaceInput,
};
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize)]
struct PacesReport {
    method: &'static str,
    algorithm: PaceAlgorithm,
    description: &'static str,
    formula: &'static str,
    performance: Performance,
    metric: FitnessMetric,
    paces: PaceSet,
}

fn pace_input(
    algorithm: PaceAlgorithm,
    performance: Performance,
    metric: &FitnessMetric,
    base_pace: Option<&str>,
) -> AppResult<PaceInput> {
    let input = match (algorithm, metric.as_vdot()) {
        (PaceAlgorithm::Daniels, Some(vdot)) => PaceInput::Vdot { vdot },
        (PaceAlgorithm::McMillan, _) => PaceInput::McMillan {
            performance,
            base_pace_seconds_per_mile: match base_pace {
                Some(pace) => parse_pace(pace)?,
                None => performance.pace_seconds_per_mile(),
            },
        },
        _ => PaceInput::Performance { performance },
    };
    Ok(input)
}

/// Score the race and print the metric with its training paces
pub fn run(
    config: &AppConfig,
    race: &RaceInput,
    algorithm: Option<&str>,
    base_pace: Option<&str>,
) -> AppResult<()> {
    let started = Instant::now();
    let algorithm = match algorithm {
        Some(tag) => tag.parse::<PaceAlgorithm>()?,
        None => config.intelligence.algorithms.default_algorithm,
    };

    let performance = race.to_performance()?;
    let metric = compute_fitness_metric(
        algorithm,
        performance.time_seconds(),
        performance.distance_meters(),
    )?;
    let input = pace_input(algorithm, performance, &metric, base_pace)?;
    let paces = derive_training_paces(algorithm, &input);
    AppLogger::log_calculation(
        "training_paces",
        algorithm.name(),
        paces.is_ok(),
        started.elapsed().as_micros(),
    );

    print_json(&PacesReport {
        method: algorithm.label(),
        algorithm,
        description: algorithm.description(),
        formula: algorithm.formula(),
        performance,
        metric,
        paces: paces?,
    })
}
