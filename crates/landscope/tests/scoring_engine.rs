//! Behavioral specifications for the suitability scoring engine: score bounds,
//! the recommendation cascade, monotonicity, and input validation, exercised
//! through the public facade only.

use landscope::suitability::scoring::{InvalidInput, ScoreFactor, ScoringConfig, SuitabilityEngine};
use landscope::suitability::{ConstraintKind, ParcelMeasurement, Recommendation};

fn engine() -> SuitabilityEngine {
    SuitabilityEngine::new(ScoringConfig::default())
}

fn measurement(total: f64, flood: f64, wetland: f64, slope: f64, setback: f64) -> ParcelMeasurement {
    ParcelMeasurement {
        total_acres: total,
        flood_acres: flood,
        wetland_acres: wetland,
        slope_acres: slope,
        setback_acres: setback,
    }
}

#[test]
fn clean_ten_acre_parcel_scores_89_strong_buy() {
    let result = engine()
        .score(&measurement(10.0, 0.0, 0.0, 0.0, 0.5))
        .expect("valid measurement");

    assert!((result.buildable_acres - 9.5).abs() < 1e-9);
    assert!((result.buildable_ratio - 0.95).abs() < 1e-9);
    assert_eq!(result.score, 89);
    assert_eq!(result.recommendation, Recommendation::StrongBuy);

    let points: Vec<f64> = result.breakdown.iter().map(|c| c.points).collect();
    assert!((points[0] - 38.0).abs() < 1e-6);
    assert!((points[1] - 28.5).abs() < 1e-6);
    assert!((points[2] - 15.0).abs() < 1e-6);
    assert!((points[3] - 7.5).abs() < 1e-6);
}

#[test]
fn heavily_constrained_three_acre_parcel_scores_16_avoid() {
    let result = engine()
        .score(&measurement(3.0, 1.0, 0.5, 0.3, 0.3))
        .expect("valid measurement");

    assert!((result.buildable_acres - 0.9).abs() < 1e-9);
    assert_eq!(result.score, 16);
    assert_eq!(result.recommendation, Recommendation::Avoid);

    // All three diversity constraint types are active, so that component
    // contributes nothing.
    let diversity = &result.breakdown[2];
    assert_eq!(diversity.factor, ScoreFactor::ConstraintDiversity);
    assert_eq!(diversity.points, 0.0);
}

#[test]
fn score_stays_within_bounds_across_a_grid_of_inputs() {
    let engine = engine();
    for total in [0.5, 1.0, 3.0, 8.0, 15.0, 40.0] {
        for constrained in [0.0, 0.4, 1.0, 3.0, 10.0, 50.0] {
            let result = engine
                .score(&measurement(total, constrained, 0.0, 0.0, 0.0))
                .expect("valid measurement");
            assert!(result.score <= 100);
            assert!(result.buildable_acres >= 0.0);
            assert!(result.buildable_ratio >= 0.0 && result.buildable_ratio <= 1.0);
        }
    }
}

#[test]
fn over_constrained_parcel_clamps_buildable_at_zero() {
    let result = engine()
        .score(&measurement(5.0, 3.0, 2.0, 1.5, 1.0))
        .expect("valid measurement");

    assert_eq!(result.buildable_acres, 0.0);
    assert_eq!(result.buildable_ratio, 0.0);
    // Only size and diversity can contribute now; score stays non-negative.
    assert!(result.score <= 30);
}

#[test]
fn perfect_large_parcel_reaches_the_ceiling() {
    let result = engine()
        .score(&measurement(20.0, 0.0, 0.0, 0.0, 0.0))
        .expect("valid measurement");
    assert_eq!(result.score, 100);
    assert_eq!(result.recommendation, Recommendation::StrongBuy);
}

#[test]
fn high_ratio_on_a_tiny_parcel_is_gated_below_buy() {
    // A one-acre unconstrained parcel has a perfect ratio yet negligible
    // absolute buildable area; the acreage gates must keep it out of the
    // purchase tiers.
    let result = engine()
        .score(&measurement(1.0, 0.0, 0.0, 0.0, 0.0))
        .expect("valid measurement");

    assert!(result.score >= 55);
    assert_eq!(result.recommendation, Recommendation::Risky);
}

#[test]
fn freeing_constrained_acreage_never_lowers_the_score() {
    let engine = engine();
    let mut last_score = 0;
    // Sweep flood acreage downward; buildable rises monotonically.
    for flood in [6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.5, 0.0] {
        let result = engine
            .score(&measurement(12.0, flood, 0.8, 0.0, 0.4))
            .expect("valid measurement");
        assert!(
            result.score >= last_score,
            "score regressed from {last_score} to {} at flood={flood}",
            result.score
        );
        last_score = result.score;
    }
}

#[test]
fn breakdown_is_ordered_and_sums_to_the_score() {
    let engine = engine();
    for m in [
        measurement(10.0, 0.0, 0.0, 0.0, 0.5),
        measurement(3.0, 1.0, 0.5, 0.3, 0.3),
        measurement(7.3, 0.0, 1.2, 0.0, 0.6),
        measurement(18.0, 2.0, 0.0, 1.0, 0.8),
    ] {
        let result = engine.score(&m).expect("valid measurement");

        let factors: Vec<ScoreFactor> = result.breakdown.iter().map(|c| c.factor).collect();
        assert_eq!(
            factors,
            vec![
                ScoreFactor::BuildableRatio,
                ScoreFactor::AbsoluteArea,
                ScoreFactor::ConstraintDiversity,
                ScoreFactor::ParcelSize,
            ]
        );

        let raw_sum: f64 = result.breakdown.iter().map(|c| c.points).sum();
        assert_eq!(raw_sum.floor() as u8, result.score);
        for component in &result.breakdown {
            assert!(component.points >= 0.0);
            assert!(component.points <= component.points_possible + 1e-9);
        }
    }
}

#[test]
fn scoring_is_deterministic_and_repeatable() {
    let engine = engine();
    let m = measurement(9.7, 0.4, 0.0, 0.9, 0.5);
    let first = engine.score(&m).expect("valid measurement");
    let second = engine.score(&m).expect("valid measurement");
    assert_eq!(first, second);
}

#[test]
fn non_positive_total_acreage_is_rejected() {
    let engine = engine();
    for total in [0.0, -3.0] {
        let err = engine
            .score(&measurement(total, 0.0, 0.0, 0.0, 0.0))
            .expect_err("must reject non-positive total");
        assert!(matches!(err, InvalidInput::NonPositiveTotalAcres(_)));
    }
}

#[test]
fn negative_constraint_acreage_is_rejected_per_field() {
    let engine = engine();
    let cases = [
        (measurement(5.0, -0.1, 0.0, 0.0, 0.0), ConstraintKind::Flood),
        (measurement(5.0, 0.0, -1.0, 0.0, 0.0), ConstraintKind::Wetland),
        (measurement(5.0, 0.0, 0.0, -0.5, 0.0), ConstraintKind::Slope),
        (measurement(5.0, 0.0, 0.0, 0.0, -2.0), ConstraintKind::Setback),
    ];

    for (m, expected_field) in cases {
        match engine.score(&m) {
            Err(InvalidInput::NegativeAcreage { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected NegativeAcreage for {expected_field:?}, got {other:?}"),
        }
    }
}

#[test]
fn breakdown_label_rounds_for_display_only() {
    let result = engine()
        .score(&measurement(10.0, 0.0, 0.0, 0.0, 0.5))
        .expect("valid measurement");

    assert_eq!(
        result.breakdown_label(),
        "Buildable Ratio: 38/40 | Area: 28/30 | Constraints: 15/15 | Size: 8/15"
    );
}
