// ABOUTME: Configuration module for RunPace Pro application settings
// ABOUTME: Environment-driven log level, deployment mode, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

//! Configuration module
//!
//! All configuration comes from environment variables; there are no config
//! files. Engine settings live in [`runpace_intelligence::config`] and are
//! re-exported here.

/// Environment and application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
pub use runpace_intelligence::config::{
    AlgorithmConfig, ConfigError, IntelligenceConfig, PlanConfig,
};
