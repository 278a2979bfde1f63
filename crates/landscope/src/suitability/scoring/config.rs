use serde::{Deserialize, Serialize};

/// Weights, saturation points, and tier gates for the suitability rubric.
///
/// Weights sum to 100 so the composite score lands on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub buildable_ratio_weight: f64,
    pub absolute_area_weight: f64,
    pub constraint_diversity_weight: f64,
    pub parcel_size_weight: f64,
    /// Buildable acreage at which the absolute-area component saturates.
    pub absolute_area_saturation_acres: f64,
    /// Total acreage at which the parcel-size component saturates.
    pub parcel_size_saturation_acres: f64,
    pub tiers: TierGates,
}

/// Joint (score, buildable acres) gates for each recommendation tier,
/// evaluated best-first. The buildable gate keeps tiny parcels with a
/// ratio-driven score from being over-recommended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierGates {
    pub strong_buy_min_score: u8,
    pub strong_buy_min_buildable: f64,
    pub buy_min_score: u8,
    pub buy_min_buildable: f64,
    pub conditional_min_score: u8,
    pub conditional_min_buildable: f64,
    pub risky_min_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            buildable_ratio_weight: 40.0,
            absolute_area_weight: 30.0,
            constraint_diversity_weight: 15.0,
            parcel_size_weight: 15.0,
            absolute_area_saturation_acres: 10.0,
            parcel_size_saturation_acres: 20.0,
            tiers: TierGates::default(),
        }
    }
}

impl Default for TierGates {
    fn default() -> Self {
        Self {
            strong_buy_min_score: 70,
            strong_buy_min_buildable: 5.0,
            buy_min_score: 55,
            buy_min_buildable: 3.0,
            conditional_min_score: 40,
            conditional_min_buildable: 1.5,
            risky_min_score: 25,
        }
    }
}
