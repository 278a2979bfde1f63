//! Buildable-land analysis: multi-criteria parcel suitability scoring,
//! screening filters, portfolio reporting, and CSV export.
//!
//! The scoring engine is pure and stateless; everything around it (sample
//! generation, filtering, reporting) consumes its output without mutating the
//! ingested records.

pub mod config;
pub mod error;
pub mod suitability;
pub mod telemetry;
