use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{Recommendation, Zoning};
use super::portfolio::ScoredParcel;

/// Immutable screening criteria applied over scored parcels.
///
/// Replaces ad-hoc UI filter state: callers build one value, apply it, and the
/// underlying records are never touched. `None` on an optional criterion means
/// "no restriction".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelFilter {
    pub min_buildable_acres: f64,
    pub max_total_cost: Option<f64>,
    pub zoning: Option<BTreeSet<Zoning>>,
    pub recommendations: Option<BTreeSet<Recommendation>>,
}

impl Default for ParcelFilter {
    fn default() -> Self {
        Self {
            min_buildable_acres: 0.0,
            max_total_cost: None,
            zoning: None,
            recommendations: None,
        }
    }
}

impl ParcelFilter {
    pub fn matches(&self, scored: &ScoredParcel) -> bool {
        if scored.result.buildable_acres < self.min_buildable_acres {
            return false;
        }

        if let Some(cap) = self.max_total_cost {
            if scored.parcel.total_cost() > cap {
                return false;
            }
        }

        if let Some(zones) = &self.zoning {
            if !zones.contains(&scored.parcel.zoning) {
                return false;
            }
        }

        if let Some(tiers) = &self.recommendations {
            if !tiers.contains(&scored.result.recommendation) {
                return false;
            }
        }

        true
    }

    /// Pure selection preserving input order.
    pub fn apply<'a>(&self, scored: &'a [ScoredParcel]) -> Vec<&'a ScoredParcel> {
        scored.iter().filter(|entry| self.matches(entry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::domain::{Parcel, ParcelId, ParcelMeasurement};
    use super::super::scoring::{ScoringConfig, SuitabilityEngine};
    use super::*;

    fn scored(id: &str, total: f64, flood: f64, zoning: Zoning, cost_per_acre: f64) -> ScoredParcel {
        let parcel = Parcel {
            id: ParcelId(id.to_string()),
            latitude: 36.9,
            longitude: -121.0,
            measurement: ParcelMeasurement {
                total_acres: total,
                flood_acres: flood,
                wetland_acres: 0.0,
                slope_acres: 0.0,
                setback_acres: 0.5,
            },
            zoning,
            cost_per_acre,
            elevation_ft: 250,
        };
        let engine = SuitabilityEngine::new(ScoringConfig::default());
        let result = engine.score(&parcel.measurement).expect("valid measurement");
        ScoredParcel { parcel, result }
    }

    #[test]
    fn buildable_floor_excludes_thin_parcels() {
        let filter = ParcelFilter {
            min_buildable_acres: 5.0,
            ..ParcelFilter::default()
        };
        let big = scored("APN-1", 12.0, 0.0, Zoning::R1, 80_000.0);
        let small = scored("APN-2", 2.0, 0.0, Zoning::R1, 80_000.0);

        assert!(filter.matches(&big));
        assert!(!filter.matches(&small));
    }

    #[test]
    fn zoning_and_cost_criteria_combine() {
        let filter = ParcelFilter {
            min_buildable_acres: 0.0,
            max_total_cost: Some(500_000.0),
            zoning: Some([Zoning::R1, Zoning::R2].into_iter().collect()),
            recommendations: None,
        };

        let cheap_r1 = scored("APN-3", 5.0, 0.0, Zoning::R1, 90_000.0);
        let pricey_r1 = scored("APN-4", 5.0, 0.0, Zoning::R1, 150_000.0);
        let cheap_c1 = scored("APN-5", 5.0, 0.0, Zoning::C1, 90_000.0);

        assert!(filter.matches(&cheap_r1));
        assert!(!filter.matches(&pricey_r1));
        assert!(!filter.matches(&cheap_c1));
    }

    #[test]
    fn apply_preserves_input_order() {
        let filter = ParcelFilter::default();
        let entries = vec![
            scored("APN-6", 8.0, 0.0, Zoning::R2, 70_000.0),
            scored("APN-7", 9.0, 0.0, Zoning::R3, 70_000.0),
        ];

        let selected = filter.apply(&entries);
        let ids: Vec<&str> = selected.iter().map(|s| s.parcel.id.0.as_str()).collect();
        assert_eq!(ids, vec!["APN-6", "APN-7"]);
    }
}
