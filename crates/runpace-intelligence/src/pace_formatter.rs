// ABOUTME: Renders paces as M:SS and race times as H:MM:SS display strings
// ABOUTME: Shared by every calculator; rejects negative and non-finite values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use runpace_core::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use runpace_core::errors::ValidationError;
use runpace_core::models::{PaceSeconds, PaceSet};

fn ensure_renderable(seconds: f64) -> Result<(), ValidationError> {
    if !seconds.is_finite() {
        return Err(ValidationError::invalid_pace(seconds, "value is not finite"));
    }
    if seconds < 0.0 {
        return Err(ValidationError::invalid_pace(seconds, "value is negative"));
    }
    Ok(())
}

/// Format a pace as `M:SS`, truncating both components
///
/// `format_pace(125.0) == "2:05"`, `format_pace(599.99) == "9:59"`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPace` for negative or non-finite input.
pub fn format_pace(seconds_per_unit: f64) -> Result<String, ValidationError> {
    ensure_renderable(seconds_per_unit)?;

    let minutes = (seconds_per_unit / SECONDS_PER_MINUTE).floor() as u64;
    let seconds = (seconds_per_unit % SECONDS_PER_MINUTE).floor() as u64;

    Ok(format!("{minutes}:{seconds:02}"))
}

/// Format a race time as `H:MM:SS`, or `M:SS` under an hour, rounded to the second
///
/// # Errors
///
/// Returns `ValidationError::InvalidPace` for negative or non-finite input.
pub fn format_time(seconds: f64) -> Result<String, ValidationError> {
    ensure_renderable(seconds)?;

    let total_seconds = seconds.round() as u64;
    let hours = total_seconds / u64::from(SECONDS_PER_HOUR);
    let minutes = (total_seconds % u64::from(SECONDS_PER_HOUR)) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        Ok(format!("{hours}:{minutes:02}:{secs:02}"))
    } else {
        Ok(format!("{minutes}:{secs:02}"))
    }
}

/// Format every pace in a set
///
/// # Errors
///
/// Fails on the first pace that cannot be rendered; no partial set is returned.
pub fn format_paces(paces: &PaceSeconds) -> Result<PaceSet, ValidationError> {
    Ok(PaceSet {
        easy: format_pace(paces.easy)?,
        marathon: format_pace(paces.marathon)?,
        threshold: format_pace(paces.threshold)?,
        interval: format_pace(paces.interval)?,
        repetition: format_pace(paces.repetition)?,
    })
}
