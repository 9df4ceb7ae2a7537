// ABOUTME: Integration tests for environment-driven configuration and logging setup
// ABOUTME: Validates AppConfig and LoggingConfig loading, overrides, and rejection of bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runpace_intelligence::config::{DEFAULT_ALGORITHM_ENV, PLAN_MAX_WEEKS_ENV};
use runpace_pro::config::{AppConfig, Environment, LogLevel};
use runpace_pro::logging::{LogFormat, LoggingConfig};
use runpace_pro::{PaceAlgorithm, PlanGenerator};
use serial_test::serial;
use std::env;

const ENV_VARS: [&str; 6] = [
    DEFAULT_ALGORITHM_ENV,
    PLAN_MAX_WEEKS_ENV,
    "RUST_LOG",
    "ENVIRONMENT",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_env();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.intelligence.algorithms.default_algorithm,
        PaceAlgorithm::Daniels
    );
    assert_eq!(config.intelligence.plan.max_duration_weeks, 52);
}

#[test]
#[serial]
fn test_app_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("ENVIRONMENT", "production");
    env::set_var(DEFAULT_ALGORITHM_ENV, "Riegel");
    env::set_var(PLAN_MAX_WEEKS_ENV, "16");

    let config = AppConfig::from_env().unwrap();
    assert!(config.environment.is_production());
    assert_eq!(
        config.intelligence.algorithms.default_algorithm,
        PaceAlgorithm::Riegel
    );

    let generator = PlanGenerator::new(config.intelligence.plan);
    assert_eq!(generator.config().max_duration_weeks, 16);

    clear_env();
}

#[test]
#[serial]
fn test_app_config_rejects_bad_engine_settings() {
    clear_env();

    env::set_var(DEFAULT_ALGORITHM_ENV, "cameron");
    let error = AppConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("Invalid engine configuration"));
    env::remove_var(DEFAULT_ALGORITHM_ENV);

    env::set_var(PLAN_MAX_WEEKS_ENV, "500");
    assert!(AppConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "trace");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Trace);
    assert!(config.include_location);
    assert!(!config.include_spans);

    clear_env();
}

#[test]
#[serial]
fn test_logging_config_falls_back_on_bad_values() {
    clear_env();
    env::set_var("LOG_FORMAT", "xml");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warn);
    assert!(config.include_location);
    assert!(config.include_thread);

    clear_env();
}
