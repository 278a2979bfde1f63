use serde::Serialize;

use super::super::domain::{ConstraintKind, Recommendation};

/// Parcel count for one recommendation tier, emitted in tier order. Carries
/// the tier's map fill so legends and layers render without a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCountEntry {
    pub recommendation: Recommendation,
    pub label: &'static str,
    pub map_color: [u8; 4],
    pub count: usize,
}

/// Aggregate footprint of one constraint type across the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintBreakdownEntry {
    pub kind: ConstraintKind,
    pub label: &'static str,
    pub total_acres: f64,
    pub parcels_affected: usize,
}

/// Highlight card for the best-scoring parcel in the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopParcelView {
    pub parcel_id: String,
    pub score: u8,
    pub recommendation: Recommendation,
    pub recommendation_label: &'static str,
    pub buildable_acres: f64,
    pub total_acres: f64,
    pub flood_acres: f64,
    pub wetland_acres: f64,
    pub slope_acres: f64,
    pub zoning_label: &'static str,
    pub total_cost: f64,
}

/// Screening narrative derived from the summary, replacing the original
/// dashboard's generated prose with deterministic structured output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioInsights {
    pub screened: usize,
    pub qualified: usize,
    pub strong_buy_count: usize,
    pub buy_count: usize,
    pub conditional_count: usize,
    pub avg_buildable_acres: f64,
    pub flood_affected: usize,
    pub wetland_affected: usize,
    pub slope_affected: usize,
    pub top_parcel: Option<TopParcelView>,
}

impl PortfolioInsights {
    /// Render the insights as printable lines for CLI output.
    pub fn narrative(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Analysis complete: {} parcels screened", self.screened),
            format!(
                "{} parcels qualify under the current filter ({} STRONG BUY, {} BUY, {} CONDITIONAL)",
                self.qualified, self.strong_buy_count, self.buy_count, self.conditional_count
            ),
            format!(
                "Average buildable area across qualified parcels: {:.1} acres",
                self.avg_buildable_acres
            ),
        ];

        if let Some(top) = &self.top_parcel {
            lines.push(format!(
                "Top parcel {} scores {}/100 ({}) with {:.1} of {:.1} acres buildable, zoned {}, total cost ${:.0}",
                top.parcel_id,
                top.score,
                top.recommendation_label,
                top.buildable_acres,
                top.total_acres,
                top.zoning_label,
                top.total_cost
            ));
        }

        lines.push(format!(
            "Constraint exposure: flood {} parcels, wetland {}, steep slope {}",
            self.flood_affected, self.wetland_affected, self.slope_affected
        ));

        lines
    }
}
