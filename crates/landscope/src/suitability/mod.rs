pub mod domain;
pub mod export;
pub mod filter;
pub mod portfolio;
pub mod report;
pub mod sample;
pub mod scoring;

pub use domain::{ConstraintKind, Parcel, ParcelId, ParcelMeasurement, Recommendation, Zoning};
pub use filter::ParcelFilter;
pub use portfolio::{score_portfolio, Portfolio, RejectedParcel, ScoredParcel};
pub use report::PortfolioSummary;
pub use scoring::{InvalidInput, ScoringConfig, SuitabilityEngine, SuitabilityResult};
