// ABOUTME: `predict` subcommand projecting a race result to the standard distances
// ABOUTME: Prints Riegel equivalent times as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::helpers::display::print_json;
use runpace_pro::input::RaceInput;
use runpace_pro::{AppResult, RacePredictor};

/// Print equivalent times for a race result
pub fn run(race: &RaceInput) -> AppResult<()> {
    let performance = race.to_performance()?;
    let predictions = RacePredictor::generate_race_predictions(&performance)?;
    print_json(&predictions)
}
