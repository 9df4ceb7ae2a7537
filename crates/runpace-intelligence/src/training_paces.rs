// ABOUTME: Derives the five named training paces from the input each algorithm accepts
// ABOUTME: Routes VDOT, performance, or McMillan base-pace input and formats the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::algorithms::{DanielsCalculator, McMillanCalculator, PaceAlgorithm, RiegelCalculator};
use crate::pace_formatter::format_paces;
use runpace_core::errors::ValidationError;
use runpace_core::models::{PaceSeconds, PaceSet, Performance};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Input to the training pace deriver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaceInput {
    /// A Daniels VDOT
    Vdot {
        /// VDOT value, 30-85
        vdot: f64,
    },
    /// A race performance
    Performance {
        /// The race result
        performance: Performance,
    },
    /// A race performance plus the per-mile base pace McMillan scales from
    McMillan {
        /// The race result, selecting the distance band
        performance: Performance,
        /// Base pace in seconds per mile
        base_pace_seconds_per_mile: f64,
    },
}

impl PaceInput {
    /// Short name of the input kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Vdot { .. } => "vdot",
            Self::Performance { .. } => "performance",
            Self::McMillan { .. } => "mcmillan",
        }
    }
}

impl From<Performance> for PaceInput {
    fn from(performance: Performance) -> Self {
        Self::Performance { performance }
    }
}

/// Derive training paces in seconds per mile
///
/// # Errors
///
/// Returns `ValidationError::IncompatibleInput` if the algorithm does not
/// accept this kind of input, or the calculator's own validation error.
pub fn derive_pace_seconds(
    algorithm: PaceAlgorithm,
    input: &PaceInput,
) -> Result<PaceSeconds, ValidationError> {
    match (algorithm, input) {
        (PaceAlgorithm::Daniels, PaceInput::Vdot { vdot }) => {
            DanielsCalculator::training_pace_seconds(*vdot)
        }
        (PaceAlgorithm::Daniels, PaceInput::Performance { performance }) => {
            DanielsCalculator::training_pace_seconds(DanielsCalculator::calculate_vdot(
                performance,
            ))
        }
        (PaceAlgorithm::Riegel, PaceInput::Performance { performance }) => {
            Ok(RiegelCalculator::training_pace_seconds(performance))
        }
        (
            PaceAlgorithm::McMillan,
            PaceInput::McMillan {
                performance,
                base_pace_seconds_per_mile,
            },
        ) => McMillanCalculator::training_pace_seconds(performance, *base_pace_seconds_per_mile),
        (PaceAlgorithm::Daniels, _) => Err(ValidationError::incompatible_input(
            "daniels",
            "vdot or performance",
            input.kind(),
        )),
        (PaceAlgorithm::Riegel, _) => Err(ValidationError::incompatible_input(
            "riegel",
            "performance",
            input.kind(),
        )),
        (PaceAlgorithm::McMillan, _) => Err(ValidationError::incompatible_input(
            "mcmillan",
            "performance with base pace",
            input.kind(),
        )),
    }
}

/// Derive the five named training paces as `M:SS` per mile
///
/// # Errors
///
/// Returns `ValidationError::IncompatibleInput` for an input the algorithm
/// does not accept, `ValidationError::MetricOutOfRange` for a VDOT outside
/// 30-85, or `ValidationError::InvalidPace` for a pace that cannot be rendered.
pub fn derive_training_paces(
    algorithm: PaceAlgorithm,
    input: &PaceInput,
) -> Result<PaceSet, ValidationError> {
    let seconds = derive_pace_seconds(algorithm, input)?;
    let paces = format_paces(&seconds)?;

    debug!(
        algorithm = algorithm.name(),
        input = input.kind(),
        easy = %paces.easy,
        threshold = %paces.threshold,
        "Derived training paces"
    );

    Ok(paces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_k() -> Performance {
        Performance::new(1200, 5000.0).unwrap()
    }

    #[test]
    fn test_mcmillan_paces_from_base() {
        let input = PaceInput::McMillan {
            performance: five_k(),
            base_pace_seconds_per_mile: 400.0,
        };
        let paces = derive_training_paces(PaceAlgorithm::McMillan, &input).unwrap();
        assert_eq!(paces.easy, "8:20");
        assert_eq!(paces.marathon, "7:00");
        assert_eq!(paces.threshold, "6:20");
        assert_eq!(paces.interval, "6:08");
        assert_eq!(paces.repetition, "6:00");
    }

    #[test]
    fn test_daniels_accepts_performance() {
        let from_performance =
            derive_training_paces(PaceAlgorithm::Daniels, &five_k().into()).unwrap();
        let from_vdot =
            derive_training_paces(PaceAlgorithm::Daniels, &PaceInput::Vdot { vdot: 30.0 }).unwrap();
        assert_eq!(from_performance, from_vdot);
    }

    #[test]
    fn test_incompatible_inputs() {
        let vdot = PaceInput::Vdot { vdot: 50.0 };
        assert!(matches!(
            derive_training_paces(PaceAlgorithm::Riegel, &vdot),
            Err(ValidationError::IncompatibleInput {
                algorithm: "riegel",
                provided: "vdot",
                ..
            })
        ));
        assert!(matches!(
            derive_training_paces(PaceAlgorithm::McMillan, &five_k().into()),
            Err(ValidationError::IncompatibleInput { .. })
        ));
        let mcmillan = PaceInput::McMillan {
            performance: five_k(),
            base_pace_seconds_per_mile: 400.0,
        };
        assert!(derive_training_paces(PaceAlgorithm::Daniels, &mcmillan).is_err());
    }

    #[test]
    fn test_riegel_paces_are_formatted() {
        let paces = derive_training_paces(PaceAlgorithm::Riegel, &five_k().into()).unwrap();
        for (_, pace) in paces.iter() {
            let (minutes, seconds) = pace.split_once(':').unwrap();
            assert!(minutes.parse::<u32>().is_ok());
            assert_eq!(seconds.len(), 2);
        }
    }
}
