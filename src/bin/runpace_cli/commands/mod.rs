// ABOUTME: Subcommand implementations for runpace-cli
// ABOUTME: Shared race argument handling for the paces, plan, and predict commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

pub mod paces;
pub mod plan;
pub mod predict;

use runpace_pro::input::RaceInput;

/// Build a race input from the common `--time`, `--distance`, and `--meters` arguments
pub fn race_input(time: String, distance: String, meters: Option<f64>) -> RaceInput {
    RaceInput {
        time,
        distance,
        custom_distance_meters: meters,
    }
}
