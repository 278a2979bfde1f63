mod config;
mod policy;
mod rules;

pub use config::{ScoringConfig, TierGates};

use super::domain::{ConstraintKind, ParcelMeasurement, Recommendation};
use policy::decide_tier;
use serde::{Deserialize, Serialize};

/// Stateless engine applying the rubric configuration to parcel measurements.
///
/// Scoring is a pure transformation: no I/O, no shared mutable state, and
/// identical inputs always produce identical outputs, so batches can be scored
/// concurrently without coordination.
pub struct SuitabilityEngine {
    config: ScoringConfig,
}

impl SuitabilityEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a single measurement, returning the composite score, component
    /// breakdown, and recommendation tier.
    pub fn score(&self, measurement: &ParcelMeasurement) -> Result<SuitabilityResult, InvalidInput> {
        validate(measurement)?;

        let (breakdown, raw_total, signals) = rules::score_measurement(measurement, &self.config);

        // Each component is capped at its weight, so the floor of the sum
        // stays inside 0..=100; the clamp only guards float noise.
        let score = raw_total.floor().clamp(0.0, 100.0) as u8;
        let recommendation = decide_tier(score, signals.buildable_acres, &self.config.tiers);

        Ok(SuitabilityResult {
            buildable_acres: signals.buildable_acres,
            buildable_ratio: signals.buildable_ratio,
            score,
            breakdown,
            recommendation,
        })
    }
}

fn validate(measurement: &ParcelMeasurement) -> Result<(), InvalidInput> {
    if measurement.total_acres <= 0.0 || !measurement.total_acres.is_finite() {
        return Err(InvalidInput::NonPositiveTotalAcres(measurement.total_acres));
    }

    for kind in ConstraintKind::ordered() {
        let acres = kind.acres_on(measurement);
        if acres < 0.0 || !acres.is_finite() {
            return Err(InvalidInput::NegativeAcreage { field: kind, value: acres });
        }
    }

    Ok(())
}

/// Rejected measurement. Scoring never returns a partial result on this path.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum InvalidInput {
    #[error("total_acres must be strictly positive, got {0}")]
    NonPositiveTotalAcres(f64),
    #[error("{} acreage must be non-negative, got {value}", .field.label())]
    NegativeAcreage { field: ConstraintKind, value: f64 },
}

/// Scoring output for one parcel, produced fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityResult {
    pub buildable_acres: f64,
    pub buildable_ratio: f64,
    pub score: u8,
    pub breakdown: Vec<ScoreComponent>,
    pub recommendation: Recommendation,
}

impl SuitabilityResult {
    /// One-line breakdown for tooltips and table cells. Points are rounded to
    /// integers here and only here; score computation keeps full precision.
    pub fn breakdown_label(&self) -> String {
        self.breakdown
            .iter()
            .map(|component| {
                format!(
                    "{}: {:.0}/{:.0}",
                    component.factor.short_label(),
                    component.points,
                    component.points_possible
                )
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Discrete contribution to a composite score, kept at full precision so
/// audits can reproduce the exact total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub points_possible: f64,
    pub notes: String,
}

/// The four weighted factors, in fixed breakdown order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    BuildableRatio,
    AbsoluteArea,
    ConstraintDiversity,
    ParcelSize,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::BuildableRatio => "Buildable Ratio",
            ScoreFactor::AbsoluteArea => "Absolute Buildable Area",
            ScoreFactor::ConstraintDiversity => "Constraint Diversity",
            ScoreFactor::ParcelSize => "Total Parcel Size",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            ScoreFactor::BuildableRatio => "Buildable Ratio",
            ScoreFactor::AbsoluteArea => "Area",
            ScoreFactor::ConstraintDiversity => "Constraints",
            ScoreFactor::ParcelSize => "Size",
        }
    }
}
