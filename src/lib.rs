// ABOUTME: Main library entry point for RunPace Pro training pace and plan tools
// ABOUTME: Re-exports the engine and adds input parsing, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

#![deny(unsafe_code)]

//! # `RunPace` Pro
//!
//! Training pace calculators and structured running plan generation.
//!
//! ## Architecture
//!
//! - **`runpace_core`**: error types, value models, distance constants
//! - **`runpace_intelligence`**: fitness scoring, training paces, plan generation
//! - **input**: turns `"1:30:15"` and `"Half Marathon"` into a validated performance
//! - **config** and **logging**: environment-driven application setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use runpace_pro::input::RaceInput;
//! use runpace_pro::{compute_fitness_metric, generate_plan, PaceAlgorithm};
//!
//! let performance = RaceInput::new("20:00", "5K").to_performance()?;
//! let metric = compute_fitness_metric(
//!     PaceAlgorithm::Daniels,
//!     performance.time_seconds(),
//!     performance.distance_meters(),
//! )?;
//! let plan = generate_plan("5k", &metric, 8)?;
//! println!("{} weeks, {:.1} miles", plan.duration_weeks, plan.total_distance_miles());
//! # Ok::<(), runpace_pro::ValidationError>(())
//! ```

/// Application configuration from environment variables
pub mod config;

/// Runner-entered race time and distance parsing
pub mod input;

/// Structured logging setup
pub mod logging;

pub use runpace_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ValidationError};
pub use runpace_core::models;
pub use runpace_intelligence::{
    compute_fitness_metric, derive_training_paces, format_pace, format_time, generate_plan,
    PaceAlgorithm, PaceInput, PlanGenerator, RacePredictor,
};
