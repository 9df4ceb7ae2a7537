// ABOUTME: Core types and constants for the RunPace Pro training engine
// ABOUTME: Foundation crate with error handling, value models, and distance constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

#![deny(unsafe_code)]

//! # `RunPace` Core
//!
//! Foundation crate providing shared types and constants for the `RunPace` Pro
//! pace calculators and plan generator. Everything here is a plain value type:
//! constructed per request, returned by value, never mutated afterwards.
//!
//! ## Modules
//!
//! - **errors**: `ValidationError` for engine inputs plus the application-wide `AppError`
//! - **constants**: Standard race distances and unit conversions
//! - **models**: `Performance`, `FitnessMetric`, `PaceSet`, `Workout`, `TrainingPlanSpec`

/// Unified error handling with validation errors and standard error codes
pub mod errors;

/// Race distances and unit conversion constants
pub mod constants;

/// Value models shared by the calculators and the plan generator
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, ValidationError};
