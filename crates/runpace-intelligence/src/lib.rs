// ABOUTME: Pace calculation and training plan engine for RunPace Pro
// ABOUTME: Fitness scoring, training pace derivation, plan generation, and race prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

#![deny(unsafe_code)]

//! # `RunPace` Intelligence
//!
//! Pure, synchronous computation over [`runpace_core`] models. Every
//! operation takes its inputs by value or reference and returns a fresh
//! result; there is no shared state, so all types are `Send + Sync`.
//!
//! ## Operations
//!
//! - [`compute_fitness_metric`]: race performance to VDOT, fitness factor, or equivalent times
//! - [`derive_training_paces`]: fitness input to the five named training paces
//! - [`generate_plan`]: VDOT to a multi-week structured plan
//! - [`format_pace`]: seconds per unit to `M:SS`

/// Fitness scoring algorithms and algorithm selection
pub mod algorithms;

/// Intelligence configuration loaded from the environment
pub mod config;

/// Pace and race time display formatting
pub mod pace_formatter;

/// Formula coefficients for the pace calculators
pub mod physiological_constants;

/// Plan generation from a VDOT
pub mod plan_generator;

/// Week templates per plan type
pub mod plan_templates;

/// Race time predictions at standard distances
pub mod race_prediction;

/// Training pace derivation
pub mod training_paces;

pub use algorithms::{compute_fitness_metric, PaceAlgorithm};
pub use config::{ConfigError, IntelligenceConfig};
pub use pace_formatter::{format_pace, format_time};
pub use plan_generator::{generate_plan, PlanGenerator};
pub use race_prediction::RacePredictor;
pub use training_paces::{derive_training_paces, PaceInput};
