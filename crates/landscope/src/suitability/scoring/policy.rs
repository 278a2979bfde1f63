use super::super::domain::Recommendation;
use super::config::TierGates;

/// Ordered cascade over (score, buildable acres); the first satisfied gate
/// wins. Every tier above RISKY requires both a score floor and an absolute
/// buildable-acreage floor.
pub(crate) fn decide_tier(score: u8, buildable_acres: f64, gates: &TierGates) -> Recommendation {
    if score >= gates.strong_buy_min_score && buildable_acres >= gates.strong_buy_min_buildable {
        return Recommendation::StrongBuy;
    }
    if score >= gates.buy_min_score && buildable_acres >= gates.buy_min_buildable {
        return Recommendation::Buy;
    }
    if score >= gates.conditional_min_score && buildable_acres >= gates.conditional_min_buildable {
        return Recommendation::Conditional;
    }
    if score >= gates.risky_min_score {
        return Recommendation::Risky;
    }
    Recommendation::Avoid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_score_with_thin_buildable_falls_through_to_risky() {
        let gates = TierGates::default();
        // Score clears every gate but no buildable floor above RISKY is met.
        assert_eq!(decide_tier(95, 1.0, &gates), Recommendation::Risky);
    }

    #[test]
    fn boundary_values_land_on_their_tier() {
        let gates = TierGates::default();
        assert_eq!(decide_tier(70, 5.0, &gates), Recommendation::StrongBuy);
        assert_eq!(decide_tier(70, 4.99, &gates), Recommendation::Buy);
        assert_eq!(decide_tier(55, 3.0, &gates), Recommendation::Buy);
        assert_eq!(decide_tier(55, 2.99, &gates), Recommendation::Conditional);
        assert_eq!(decide_tier(40, 1.5, &gates), Recommendation::Conditional);
        assert_eq!(decide_tier(40, 1.49, &gates), Recommendation::Risky);
        assert_eq!(decide_tier(25, 0.0, &gates), Recommendation::Risky);
        assert_eq!(decide_tier(24, 100.0, &gates), Recommendation::Avoid);
    }
}
