use serde::{Deserialize, Serialize};

/// Identifier wrapper for parcels, typically an assessor parcel number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParcelId(pub String);

/// Raw geometry and constraint acreages for a single parcel.
///
/// Measurements arrive from an external source (upload, generator, or county
/// API) and are never mutated; scoring reads them and produces a fresh result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParcelMeasurement {
    pub total_acres: f64,
    pub flood_acres: f64,
    pub wetland_acres: f64,
    pub slope_acres: f64,
    pub setback_acres: f64,
}

impl ParcelMeasurement {
    /// Sum of all constrained acreage, setbacks included.
    pub fn constrained_acres(&self) -> f64 {
        self.flood_acres + self.wetland_acres + self.slope_acres + self.setback_acres
    }
}

/// A parcel as ingested: measurement plus the fields the scorer passes through
/// untouched for filtering and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: ParcelId,
    pub latitude: f64,
    pub longitude: f64,
    pub measurement: ParcelMeasurement,
    pub zoning: Zoning,
    pub cost_per_acre: f64,
    pub elevation_ft: u32,
}

impl Parcel {
    pub fn total_cost(&self) -> f64 {
        self.measurement.total_acres * self.cost_per_acre
    }
}

/// Zoning designations carried through from the assessor roll.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Zoning {
    R1,
    R2,
    R3,
    MixedUse,
    C1,
}

impl Zoning {
    pub const fn label(self) -> &'static str {
        match self {
            Zoning::R1 => "R-1",
            Zoning::R2 => "R-2",
            Zoning::R3 => "R-3",
            Zoning::MixedUse => "MU",
            Zoning::C1 => "C-1",
        }
    }

    pub fn ordered() -> Vec<Zoning> {
        vec![Zoning::R1, Zoning::R2, Zoning::R3, Zoning::MixedUse, Zoning::C1]
    }
}

/// Discrete buy/pass classification derived jointly from the composite score
/// and absolute buildable acreage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Conditional,
    Risky,
    Avoid,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "STRONG BUY",
            Recommendation::Buy => "BUY",
            Recommendation::Conditional => "CONDITIONAL",
            Recommendation::Risky => "RISKY",
            Recommendation::Avoid => "AVOID",
        }
    }

    /// Tiers from best to worst, matching display order.
    pub fn ordered() -> Vec<Recommendation> {
        vec![
            Recommendation::StrongBuy,
            Recommendation::Buy,
            Recommendation::Conditional,
            Recommendation::Risky,
            Recommendation::Avoid,
        ]
    }

    /// RGBA fill used by map layers for this tier.
    pub const fn map_color(self) -> [u8; 4] {
        match self {
            Recommendation::StrongBuy => [16, 185, 129, 200],
            Recommendation::Buy => [52, 211, 153, 200],
            Recommendation::Conditional => [245, 158, 11, 200],
            Recommendation::Risky => [251, 146, 60, 200],
            Recommendation::Avoid => [239, 68, 68, 200],
        }
    }
}

/// Constraint categories tracked on a parcel. Setbacks are universal and are
/// excluded from the diversity penalty but still reduce buildable area.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Flood,
    Wetland,
    Slope,
    Setback,
}

impl ConstraintKind {
    pub const fn label(self) -> &'static str {
        match self {
            ConstraintKind::Flood => "Flood Zone",
            ConstraintKind::Wetland => "Wetlands",
            ConstraintKind::Slope => "Steep Slope",
            ConstraintKind::Setback => "Setbacks",
        }
    }

    pub fn ordered() -> Vec<ConstraintKind> {
        vec![
            ConstraintKind::Flood,
            ConstraintKind::Wetland,
            ConstraintKind::Slope,
            ConstraintKind::Setback,
        ]
    }

    /// Acreage recorded for this constraint on the given measurement.
    pub fn acres_on(self, measurement: &ParcelMeasurement) -> f64 {
        match self {
            ConstraintKind::Flood => measurement.flood_acres,
            ConstraintKind::Wetland => measurement.wetland_acres,
            ConstraintKind::Slope => measurement.slope_acres,
            ConstraintKind::Setback => measurement.setback_acres,
        }
    }
}
