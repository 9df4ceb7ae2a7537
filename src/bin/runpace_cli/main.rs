// ABOUTME: RunPace CLI - command-line front end for the pace and plan engine
// ABOUTME: Parses runner input, runs the calculators, and prints results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro
//!
//! Usage:
//! ```bash
//! # Training paces from a 20:00 5K (Daniels VDOT by default)
//! runpace-cli paces --time 20:00 --distance 5K
//!
//! # McMillan paces with an explicit base pace
//! runpace-cli paces --time 20:00 --distance 5K --algorithm mcmillan --base-pace 6:26
//!
//! # Four-week 5K plan for VDOT 50
//! runpace-cli plan --plan-type 5k --vdot 50 --weeks 4
//!
//! # Equivalent race times from a 40:00 10K
//! runpace-cli predict --time 40:00 --distance 10K
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use runpace_pro::config::{AppConfig, LogLevel};
use runpace_pro::logging::LoggingConfig;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "runpace-cli",
    about = "RunPace Pro training pace calculator",
    long_about = "Compute fitness scores, training paces, race predictions, and structured training plans from a race result."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Fitness score and training paces from a race result
    Paces {
        /// Race time, MM:SS or HH:MM:SS
        #[arg(long)]
        time: String,

        /// Race distance: 5K, 10K, 15K, "Half Marathon", Marathon, or custom
        #[arg(long)]
        distance: String,

        /// Distance in meters when --distance is custom
        #[arg(long)]
        meters: Option<f64>,

        /// Algorithm: daniels, riegel, or mcmillan (defaults to RUNPACE_DEFAULT_ALGORITHM)
        #[arg(long, short = 'a')]
        algorithm: Option<String>,

        /// McMillan base pace per mile, M:SS (defaults to the race pace)
        #[arg(long)]
        base_pace: Option<String>,
    },

    /// Structured multi-week training plan
    Plan {
        /// Plan type: 5k, 10k, half_marathon, or marathon
        #[arg(long)]
        plan_type: String,

        /// Target VDOT (30-85)
        #[arg(long, conflicts_with = "time")]
        vdot: Option<f64>,

        /// Race time to derive the VDOT from, MM:SS or HH:MM:SS
        #[arg(long, requires = "distance")]
        time: Option<String>,

        /// Race distance to derive the VDOT from
        #[arg(long)]
        distance: Option<String>,

        /// Distance in meters when --distance is custom
        #[arg(long)]
        meters: Option<f64>,

        /// Plan length in weeks
        #[arg(long, short = 'w', default_value_t = 12)]
        weeks: u32,
    },

    /// Equivalent race times at the standard distances
    Predict {
        /// Race time, MM:SS or HH:MM:SS
        #[arg(long)]
        time: String,

        /// Race distance: 5K, 10K, 15K, "Half Marathon", Marathon, or custom
        #[arg(long)]
        distance: String,

        /// Distance in meters when --distance is custom
        #[arg(long)]
        meters: Option<f64>,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;

    let config = AppConfig::from_env()?;
    debug!(?config, "RunPace CLI configured");

    match cli.command {
        Command::Paces {
            time,
            distance,
            meters,
            algorithm,
            base_pace,
        } => commands::paces::run(
            &config,
            &commands::race_input(time, distance, meters),
            algorithm.as_deref(),
            base_pace.as_deref(),
        )?,
        Command::Plan {
            plan_type,
            vdot,
            time,
            distance,
            meters,
            weeks,
        } => {
            let target = match (vdot, time, distance) {
                (Some(vdot), _, _) => commands::plan::Target::Vdot(vdot),
                (None, Some(time), Some(distance)) => {
                    commands::plan::Target::Race(commands::race_input(time, distance, meters))
                }
                _ => anyhow::bail!("Either --vdot or --time with --distance is required"),
            };
            commands::plan::run(&config, &plan_type, &target, weeks)?;
        }
        Command::Predict {
            time,
            distance,
            meters,
        } => commands::predict::run(&commands::race_input(time, distance, meters))?,
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            helpers::display::print_error(&error);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_weeks_defaults_to_twelve() {
        let cli =
            Cli::try_parse_from(["runpace-cli", "plan", "--plan-type", "5k", "--vdot", "50"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::Plan {
                weeks: 12,
                vdot: Some(vdot),
                ..
            } if (vdot - 50.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_plan_vdot_conflicts_with_race_time() {
        let parsed = Cli::try_parse_from([
            "runpace-cli",
            "plan",
            "--plan-type",
            "5k",
            "--vdot",
            "50",
            "--time",
            "20:00",
            "--distance",
            "5K",
        ]);
        assert!(parsed.is_err());
    }
}
