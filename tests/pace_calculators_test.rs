// ABOUTME: Integration tests for fitness scoring and training pace derivation
// ABOUTME: Exercises the Daniels, Riegel, and McMillan calculators through the public API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runpace_intelligence::algorithms::{
    DanielsCalculator, McMillanBand, McMillanCalculator, RiegelCalculator,
};
use runpace_pro::models::{FitnessMetric, PaceName, Performance, StandardDistance};
use runpace_pro::{
    compute_fitness_metric, derive_training_paces, format_pace, PaceAlgorithm, PaceInput,
    RacePredictor, ValidationError,
};

fn twenty_minute_5k() -> Performance {
    Performance::new(1200, 5000.0).unwrap()
}

/// Parse an `M:SS` pace back into seconds for ordering checks
fn pace_seconds(pace: &str) -> u64 {
    let (minutes, seconds) = pace.split_once(':').unwrap();
    minutes.parse::<u64>().unwrap() * 60 + seconds.parse::<u64>().unwrap()
}

// === Fitness scoring ===

#[test]
fn test_daniels_vdot_follows_velocity_formula() {
    // 4.1667 m/s scores below the floor
    let metric = compute_fitness_metric(PaceAlgorithm::Daniels, 1200, 5000.0).unwrap();
    assert_eq!(metric, FitnessMetric::Vdot(30.0));

    // 400 m in 1 s: -4.6 + 0.182258 x 400 + 0.000104 x 400² = 84.9432
    let metric = compute_fitness_metric(PaceAlgorithm::Daniels, 1, 400.0).unwrap();
    let vdot = metric.as_vdot().unwrap();
    assert!((vdot - 84.9).abs() < 1e-9);
}

#[test]
fn test_vdot_is_always_in_range() {
    for (time, distance) in [(1, 100_000.0), (86_400, 100.0), (1200, 5000.0), (3, 1000.0)] {
        let vdot = compute_fitness_metric(PaceAlgorithm::Daniels, time, distance)
            .unwrap()
            .as_vdot()
            .unwrap();
        assert!((30.0..=85.0).contains(&vdot), "{time}/{distance} -> {vdot}");
    }
}

#[test]
fn test_riegel_fitness_factor_for_20_minute_5k() {
    let metric = compute_fitness_metric(PaceAlgorithm::Riegel, 1200, 5000.0).unwrap();
    let factor = metric.as_fitness_factor().unwrap();

    // 1560 / (1200 x 2^1.06) x 100
    assert!((factor - 62.35).abs() < 0.01);
}

#[test]
fn test_riegel_fitness_factor_is_clamped() {
    let elite = compute_fitness_metric(PaceAlgorithm::Riegel, 1000, 10_000.0).unwrap();
    assert!((elite.as_fitness_factor().unwrap() - 100.0).abs() < f64::EPSILON);

    let slow = compute_fitness_metric(PaceAlgorithm::Riegel, 36_000, 10_000.0).unwrap();
    assert!((slow.as_fitness_factor().unwrap() - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_mcmillan_metric_is_equivalent_times() {
    let metric = compute_fitness_metric(PaceAlgorithm::McMillan, 2400, 10_000.0).unwrap();
    let FitnessMetric::EquivalentTimes(times) = metric else {
        panic!("expected equivalent times, got {metric:?}");
    };

    assert_eq!(times.times.len(), StandardDistance::ALL.len());
    let ten_k = times.get(StandardDistance::TenK).unwrap();
    assert!((ten_k.time_seconds - 2400.0).abs() < 1e-6);
    assert_eq!(ten_k.formatted, "40:00");
}

#[test]
fn test_riegel_prediction_5k_to_10k() {
    let predicted = RiegelCalculator::predict_time(1200.0, 5000.0, 10_000.0).unwrap();
    assert!((predicted - 2501.92).abs() < 0.01);

    assert!(RiegelCalculator::predict_time(0.0, 5000.0, 10_000.0).is_err());
    assert!(RiegelCalculator::predict_time(1200.0, 5000.0, f64::NAN).is_err());
}

#[test]
fn test_race_predictions_grow_with_distance() {
    let predictions = RacePredictor::generate_race_predictions(&twenty_minute_5k()).unwrap();

    let times: Vec<f64> = predictions.times.iter().map(|t| t.time_seconds).collect();
    assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(
        predictions.get(StandardDistance::TenK).unwrap().formatted,
        "41:42"
    );
}

#[test]
fn test_unknown_algorithm_tag() {
    let error = "cameron".parse::<PaceAlgorithm>().unwrap_err();
    assert!(matches!(
        error,
        ValidationError::UnknownAlgorithm {
            kind: "algorithm",
            ..
        }
    ));
    assert!(error.to_string().contains("daniels, riegel, mcmillan"));
}

// === Training paces ===

#[test]
fn test_daniels_paces_for_vdot_50() {
    let paces =
        derive_training_paces(PaceAlgorithm::Daniels, &PaceInput::Vdot { vdot: 50.0 }).unwrap();

    // interval: 1609.34 / |-0.0012 x 50 + 0.2989|
    assert_eq!(paces.interval, "112:16");
    // repetition: 1609.34 / (0.0010 x 50 + 0.3176)
    assert_eq!(paces.repetition, "72:57");
    // easy, marathon and threshold velocities are negative at VDOT 50
    assert_eq!(paces.easy, "303:04");
    assert_eq!(paces.marathon, "547:23");
    assert_eq!(paces.threshold, "439:42");

    let raw = DanielsCalculator::training_pace_seconds(50.0).unwrap();
    assert!((raw.interval - 1609.34 / 0.2389).abs() < 1e-9);
}

#[test]
fn test_daniels_accepts_performance_input() {
    let from_performance =
        derive_training_paces(PaceAlgorithm::Daniels, &twenty_minute_5k().into()).unwrap();
    let from_vdot =
        derive_training_paces(PaceAlgorithm::Daniels, &PaceInput::Vdot { vdot: 30.0 }).unwrap();
    assert_eq!(from_performance, from_vdot);
}

#[test]
fn test_daniels_rejects_out_of_range_vdot() {
    for vdot in [29.9, 85.1, f64::NAN] {
        let result = derive_training_paces(PaceAlgorithm::Daniels, &PaceInput::Vdot { vdot });
        assert!(matches!(
            result,
            Err(ValidationError::MetricOutOfRange { metric: "VDOT", .. })
        ));
    }
}

#[test]
fn test_riegel_paces_scale_race_pace() {
    let paces = derive_training_paces(PaceAlgorithm::Riegel, &twenty_minute_5k().into()).unwrap();

    // 386.24 s/mile x (1.20 + 0.002 x 37.65)
    assert_eq!(paces.easy, "8:12");

    let ordered: Vec<u64> = [
        PaceName::Easy,
        PaceName::Marathon,
        PaceName::Threshold,
        PaceName::Interval,
        PaceName::Repetition,
    ]
    .iter()
    .map(|name| pace_seconds(paces.get(*name)))
    .collect();
    assert!(ordered.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn test_mcmillan_paces_from_base_pace() {
    let input = PaceInput::McMillan {
        performance: twenty_minute_5k(),
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
fn test_mcmillan_band_boundaries() {
    assert_eq!(McMillanBand::for_distance(5000.0), McMillanBand::ShortRace);
    assert_eq!(McMillanBand::for_distance(5000.1), McMillanBand::MidRace);
    assert_eq!(McMillanBand::for_distance(10_000.0), McMillanBand::MidRace);
    assert_eq!(McMillanBand::for_distance(21_097.5), McMillanBand::LongRace);
}

#[test]
fn test_mcmillan_rejects_unusable_base_pace() {
    for base in [0.0, -10.0, f64::INFINITY] {
        assert!(matches!(
            McMillanCalculator::training_pace_seconds(&twenty_minute_5k(), base),
            Err(ValidationError::InvalidPace { .. })
        ));
    }
}

#[test]
fn test_incompatible_inputs_are_rejected() {
    let cases = [
        (PaceAlgorithm::Riegel, PaceInput::Vdot { vdot: 50.0 }),
        (PaceAlgorithm::McMillan, PaceInput::Vdot { vdot: 50.0 }),
        (PaceAlgorithm::McMillan, twenty_minute_5k().into()),
        (
            PaceAlgorithm::Daniels,
            PaceInput::McMillan {
                performance: twenty_minute_5k(),
                base_pace_seconds_per_mile: 400.0,
            },
        ),
    ];

    for (algorithm, input) in cases {
        assert!(
            matches!(
                derive_training_paces(algorithm, &input),
                Err(ValidationError::IncompatibleInput { .. })
            ),
            "{algorithm} accepted {}",
            input.kind()
        );
    }
}

#[test]
fn test_pace_input_wire_format() {
    let input: PaceInput = serde_json::from_str(r#"{"kind":"vdot","vdot":52.5}"#).unwrap();
    assert_eq!(input, PaceInput::Vdot { vdot: 52.5 });

    let invalid = serde_json::from_str::<PaceInput>(
        r#"{"kind":"performance","performance":{"time_seconds":0,"distance_meters":5000.0}}"#,
    );
    assert!(invalid.is_err());
}

#[test]
fn test_format_pace_edges() {
    assert_eq!(format_pace(125.0).unwrap(), "2:05");
    assert_eq!(format_pace(0.0).unwrap(), "0:00");
    assert!(matches!(
        format_pace(-1.0),
        Err(ValidationError::InvalidPace { .. })
    ));
    assert!(format_pace(f64::NAN).is_err());
}

// === Determinism ===

#[test]
fn test_scoring_and_paces_are_idempotent() {
    let performance = twenty_minute_5k();
    for algorithm in PaceAlgorithm::ALL {
        let first = compute_fitness_metric(algorithm, 1200, 5000.0).unwrap();
        let second = compute_fitness_metric(algorithm, 1200, 5000.0).unwrap();
        assert_eq!(first, second, "{algorithm}");
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let input = match algorithm {
            PaceAlgorithm::Daniels => PaceInput::Vdot { vdot: 50.0 },
            PaceAlgorithm::Riegel => performance.into(),
            PaceAlgorithm::McMillan => PaceInput::McMillan {
                performance,
                base_pace_seconds_per_mile: performance.pace_seconds_per_mile(),
            },
        };
        let first = derive_training_paces(algorithm, &input).unwrap();
        let second = derive_training_paces(algorithm, &input).unwrap();
        assert_eq!(first, second, "{algorithm}");
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
