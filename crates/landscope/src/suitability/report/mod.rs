mod insights;
mod summary;
pub mod views;

pub use summary::{PortfolioSummary, SQUARE_FEET_PER_ACRE};

pub(crate) use insights::generate_insights;
