// ABOUTME: Validation error types for pace calculation and plan generation inputs
// ABOUTME: Every engine failure is one of these typed, recoverable variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

//! # Validation Errors
//!
//! The engine rejects bad input at the boundary of the operation that receives
//! it and never produces partial results. Each variant carries enough context
//! for a caller to build a user-facing message, and converts into [`AppError`]
//! for HTTP-style error responses.
//!
//! [`AppError`]: super::AppError

use super::ErrorCode;
use thiserror::Error;

/// Errors raised while validating performances, metrics, and plan requests
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Race time or distance is zero, negative, or not finite
    #[error("Invalid performance: {reason}")]
    InvalidPerformance {
        /// Which part of the performance was rejected
        reason: String,
    },

    /// Algorithm or plan type tag is not part of the recognized enumeration
    #[error("Unknown {kind}: '{tag}'. Valid options: {valid}")]
    UnknownAlgorithm {
        /// What was being parsed ("algorithm" or "plan type")
        kind: &'static str,
        /// The tag as supplied by the caller
        tag: String,
        /// Comma separated list of accepted tags
        valid: &'static str,
    },

    /// Plan type has no week template
    #[error("No week template is defined for plan type '{plan_type}'")]
    UnsupportedTemplate {
        /// Plan type tag
        plan_type: String,
    },

    /// Pace value cannot be rendered (negative or not finite)
    #[error("Invalid pace {seconds} s: {reason}")]
    InvalidPace {
        /// Offending seconds-per-unit value
        seconds: f64,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The chosen algorithm does not accept the supplied metric or input kind
    #[error("{algorithm} does not accept {provided} input (expected {expected})")]
    IncompatibleInput {
        /// Algorithm or component that rejected the input
        algorithm: &'static str,
        /// Input kind it requires
        expected: &'static str,
        /// Input kind that was supplied
        provided: &'static str,
    },

    /// Fitness metric value outside the range its algorithm produces
    #[error("{metric} {value:.1} is outside the valid range ({min}-{max})")]
    MetricOutOfRange {
        /// Metric kind
        metric: &'static str,
        /// Supplied value
        value: f64,
        /// Lowest valid value
        min: f64,
        /// Highest valid value
        max: f64,
    },

    /// Plan duration is outside the configured range
    #[error("Plan duration of {weeks} weeks is outside the allowed range 1-{max}")]
    InvalidDuration {
        /// Requested number of weeks
        weeks: u32,
        /// Largest accepted number of weeks
        max: u32,
    },

    /// Race time string is not `MM:SS` or `HH:MM:SS`
    #[error("Invalid race time '{input}': expected MM:SS or HH:MM:SS")]
    InvalidTimeFormat {
        /// The string as supplied
        input: String,
    },

    /// Named race distance is not recognized
    #[error("Unknown race distance '{input}'. Valid options: 5K, 10K, 15K, Half Marathon, Marathon")]
    UnknownDistance {
        /// The string as supplied
        input: String,
    },
}

impl ValidationError {
    /// Create an "invalid performance" error
    #[must_use]
    pub fn invalid_performance(reason: impl Into<String>) -> Self {
        Self::InvalidPerformance {
            reason: reason.into(),
        }
    }

    /// Create an "unknown algorithm" error for an algorithm or plan type tag
    #[must_use]
    pub fn unknown_algorithm(kind: &'static str, tag: impl Into<String>, valid: &'static str) -> Self {
        Self::UnknownAlgorithm {
            kind,
            tag: tag.into(),
            valid,
        }
    }

    /// Create an "unsupported template" error
    #[must_use]
    pub fn unsupported_template(plan_type: impl Into<String>) -> Self {
        Self::UnsupportedTemplate {
            plan_type: plan_type.into(),
        }
    }

    /// Create an "invalid pace" error
    #[must_use]
    pub const fn invalid_pace(seconds: f64, reason: &'static str) -> Self {
        Self::InvalidPace { seconds, reason }
    }

    /// Create an "incompatible input" error
    #[must_use]
    pub const fn incompatible_input(
        algorithm: &'static str,
        expected: &'static str,
        provided: &'static str,
    ) -> Self {
        Self::IncompatibleInput {
            algorithm,
            expected,
            provided,
        }
    }

    /// Standard error code for this validation failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPerformance { .. }
            | Self::InvalidPace { .. }
            | Self::MetricOutOfRange { .. }
            | Self::InvalidDuration { .. } => ErrorCode::ValueOutOfRange,
            Self::InvalidTimeFormat { .. } => ErrorCode::InvalidFormat,
            Self::UnknownAlgorithm { .. }
            | Self::UnsupportedTemplate { .. }
            | Self::IncompatibleInput { .. }
            | Self::UnknownDistance { .. } => ErrorCode::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_codes() {
        assert_eq!(
            ValidationError::invalid_performance("Time must be positive").code(),
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(
            ValidationError::unknown_algorithm("algorithm", "cameron", "daniels").code(),
            ErrorCode::InvalidInput
        );
        assert_eq!(
            ValidationError::InvalidTimeFormat {
                input: "20".to_owned()
            }
            .code(),
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let error = ValidationError::unknown_algorithm("algorithm", "cameron", "daniels, riegel");
        assert_eq!(
            error.to_string(),
            "Unknown algorithm: 'cameron'. Valid options: daniels, riegel"
        );

        let error = ValidationError::InvalidDuration { weeks: 0, max: 52 };
        assert!(error.to_string().contains("1-52"));
    }
}
