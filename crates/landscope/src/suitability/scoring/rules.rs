use super::super::domain::{ConstraintKind, ParcelMeasurement};
use super::config::ScoringConfig;
use super::{ScoreComponent, ScoreFactor};

pub(crate) struct ScoreSignals {
    pub buildable_acres: f64,
    pub buildable_ratio: f64,
    pub active_constraint_types: usize,
}

/// Computes the four weighted components at full f64 precision. Rounding only
/// happens later, for display; the composite score floors the raw sum.
pub(crate) fn score_measurement(
    measurement: &ParcelMeasurement,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, f64, ScoreSignals) {
    let buildable_acres = (measurement.total_acres - measurement.constrained_acres()).max(0.0);
    let buildable_ratio = buildable_acres / measurement.total_acres;

    // Setbacks are universal and deliberately excluded here.
    let active_constraint_types = [
        ConstraintKind::Flood,
        ConstraintKind::Wetland,
        ConstraintKind::Slope,
    ]
    .iter()
    .filter(|kind| kind.acres_on(measurement) > 0.0)
    .count();

    let ratio_points = buildable_ratio * config.buildable_ratio_weight;
    let area_points = (buildable_acres / config.absolute_area_saturation_acres).min(1.0)
        * config.absolute_area_weight;
    let diversity_points =
        (1.0 - active_constraint_types as f64 / 3.0) * config.constraint_diversity_weight;
    let size_points = (measurement.total_acres / config.parcel_size_saturation_acres).min(1.0)
        * config.parcel_size_weight;

    let components = vec![
        ScoreComponent {
            factor: ScoreFactor::BuildableRatio,
            points: ratio_points,
            points_possible: config.buildable_ratio_weight,
            notes: format!("{:.0}% of parcel is buildable", buildable_ratio * 100.0),
        },
        ScoreComponent {
            factor: ScoreFactor::AbsoluteArea,
            points: area_points,
            points_possible: config.absolute_area_weight,
            notes: format!(
                "{buildable_acres:.2} buildable acres (saturates at {:.0}+)",
                config.absolute_area_saturation_acres
            ),
        },
        ScoreComponent {
            factor: ScoreFactor::ConstraintDiversity,
            points: diversity_points,
            points_possible: config.constraint_diversity_weight,
            notes: format!("{active_constraint_types} of 3 constraint types present"),
        },
        ScoreComponent {
            factor: ScoreFactor::ParcelSize,
            points: size_points,
            points_possible: config.parcel_size_weight,
            notes: format!(
                "{:.2} total acres (saturates at {:.0}+)",
                measurement.total_acres, config.parcel_size_saturation_acres
            ),
        },
    ];

    let raw_total = ratio_points + area_points + diversity_points + size_points;

    let signals = ScoreSignals {
        buildable_acres,
        buildable_ratio,
        active_constraint_types,
    };

    (components, raw_total, signals)
}
