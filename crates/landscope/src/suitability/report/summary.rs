use serde::Serialize;

use super::super::domain::{ConstraintKind, Recommendation};
use super::super::portfolio::ScoredParcel;
use super::views::{ConstraintBreakdownEntry, PortfolioInsights, TierCountEntry};

pub const SQUARE_FEET_PER_ACRE: f64 = 43_560.0;

/// Aggregates over a filtered selection of scored parcels, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub qualified: usize,
    pub tier_counts: Vec<TierCountEntry>,
    pub avg_buildable_acres: f64,
    pub avg_total_acres: f64,
    pub total_buildable_acres: f64,
    pub total_buildable_sqft: f64,
    pub avg_score: f64,
    pub constraints: Vec<ConstraintBreakdownEntry>,
}

impl PortfolioSummary {
    pub fn from_selection(selection: &[&ScoredParcel]) -> Self {
        let qualified = selection.len();

        let tier_counts = Recommendation::ordered()
            .into_iter()
            .map(|tier| TierCountEntry {
                recommendation: tier,
                label: tier.label(),
                map_color: tier.map_color(),
                count: selection
                    .iter()
                    .filter(|entry| entry.result.recommendation == tier)
                    .count(),
            })
            .collect();

        let total_buildable_acres: f64 = selection
            .iter()
            .map(|entry| entry.result.buildable_acres)
            .sum();
        let total_acres: f64 = selection
            .iter()
            .map(|entry| entry.parcel.measurement.total_acres)
            .sum();
        let score_sum: f64 = selection
            .iter()
            .map(|entry| entry.result.score as f64)
            .sum();

        let (avg_buildable_acres, avg_total_acres, avg_score) = if qualified > 0 {
            let n = qualified as f64;
            (total_buildable_acres / n, total_acres / n, score_sum / n)
        } else {
            (0.0, 0.0, 0.0)
        };

        let constraints = ConstraintKind::ordered()
            .into_iter()
            .map(|kind| {
                let acres: Vec<f64> = selection
                    .iter()
                    .map(|entry| kind.acres_on(&entry.parcel.measurement))
                    .collect();
                ConstraintBreakdownEntry {
                    kind,
                    label: kind.label(),
                    total_acres: acres.iter().sum(),
                    parcels_affected: acres.iter().filter(|a| **a > 0.0).count(),
                }
            })
            .collect();

        Self {
            qualified,
            tier_counts,
            avg_buildable_acres,
            avg_total_acres,
            total_buildable_acres,
            total_buildable_sqft: total_buildable_acres * SQUARE_FEET_PER_ACRE,
            avg_score,
            constraints,
        }
    }

    pub fn tier_count(&self, tier: Recommendation) -> usize {
        self.tier_counts
            .iter()
            .find(|entry| entry.recommendation == tier)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Derive the screening narrative for this selection. `screened` is the
    /// pre-filter record count, including rejected rows.
    pub fn insights(&self, selection: &[&ScoredParcel], screened: usize) -> PortfolioInsights {
        super::generate_insights(self, selection, screened)
    }
}
