// ABOUTME: Output formatting helpers for runpace-cli
// ABOUTME: Results go to stdout as pretty JSON, failures to stderr as error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use runpace_pro::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Print a result as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Print a failure on stderr
///
/// Engine and validation failures are rendered as a JSON error response;
/// anything else as plain text.
pub fn print_error(error: &anyhow::Error) {
    match error.downcast_ref::<AppError>() {
        Some(app_error) => {
            let response = ErrorResponse::from(
                AppError::new(app_error.code, app_error.message.clone())
                    .with_details(app_error.details.clone()),
            );
            match serde_json::to_string_pretty(&response) {
                Ok(rendered) => eprintln!("{rendered}"),
                Err(_) => eprintln!("Error: {app_error}"),
            }
        }
        None => eprintln!("Error: {error:#}"),
    }
}
