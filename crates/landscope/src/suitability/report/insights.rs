use super::super::domain::{ConstraintKind, Recommendation};
use super::super::portfolio::ScoredParcel;
use super::summary::PortfolioSummary;
use super::views::{PortfolioInsights, TopParcelView};

pub(crate) fn generate_insights(
    summary: &PortfolioSummary,
    selection: &[&ScoredParcel],
    screened: usize,
) -> PortfolioInsights {
    // Ties resolve to the earliest record so repeated runs highlight the same
    // parcel.
    let top_parcel = selection
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| {
            a.result
                .score
                .cmp(&b.result.score)
                .then(ib.cmp(ia))
        })
        .map(|(_, entry)| to_top_view(entry));

    let affected = |kind: ConstraintKind| {
        summary
            .constraints
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.parcels_affected)
            .unwrap_or(0)
    };

    PortfolioInsights {
        screened,
        qualified: summary.qualified,
        strong_buy_count: summary.tier_count(Recommendation::StrongBuy),
        buy_count: summary.tier_count(Recommendation::Buy),
        conditional_count: summary.tier_count(Recommendation::Conditional),
        avg_buildable_acres: summary.avg_buildable_acres,
        flood_affected: affected(ConstraintKind::Flood),
        wetland_affected: affected(ConstraintKind::Wetland),
        slope_affected: affected(ConstraintKind::Slope),
        top_parcel,
    }
}

fn to_top_view(entry: &ScoredParcel) -> TopParcelView {
    let m = &entry.parcel.measurement;
    TopParcelView {
        parcel_id: entry.parcel.id.0.clone(),
        score: entry.result.score,
        recommendation: entry.result.recommendation,
        recommendation_label: entry.result.recommendation.label(),
        buildable_acres: entry.result.buildable_acres,
        total_acres: m.total_acres,
        flood_acres: m.flood_acres,
        wetland_acres: m.wetland_acres,
        slope_acres: m.slope_acres,
        zoning_label: entry.parcel.zoning.label(),
        total_cost: entry.parcel.total_cost(),
    }
}
