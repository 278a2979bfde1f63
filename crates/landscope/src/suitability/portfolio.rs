use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::Parcel;
use super::scoring::{InvalidInput, SuitabilityEngine, SuitabilityResult};

/// A parcel paired with its scoring output. Output order always matches the
/// ingestion order of the source sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredParcel {
    pub parcel: Parcel,
    pub result: SuitabilityResult,
}

/// A batch-scored parcel set. Records that fail validation are skipped and
/// logged rather than aborting the batch; they stay available to callers that
/// want to surface them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub scored: Vec<ScoredParcel>,
    pub rejected: Vec<RejectedParcel>,
}

/// A record the engine refused, retained with the rejection reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedParcel {
    pub parcel: Parcel,
    pub reason: InvalidInput,
}

impl Portfolio {
    pub fn screened(&self) -> usize {
        self.scored.len() + self.rejected.len()
    }
}

/// Score a parcel sequence with skip-and-log semantics. Each measurement is
/// independent, so one bad record never poisons the rest.
pub fn score_portfolio(engine: &SuitabilityEngine, parcels: Vec<Parcel>) -> Portfolio {
    let mut portfolio = Portfolio::default();

    for parcel in parcels {
        match engine.score(&parcel.measurement) {
            Ok(result) => portfolio.scored.push(ScoredParcel { parcel, result }),
            Err(reason) => {
                warn!(parcel_id = %parcel.id.0, %reason, "skipping unscoreable parcel");
                portfolio.rejected.push(RejectedParcel { parcel, reason });
            }
        }
    }

    portfolio
}
