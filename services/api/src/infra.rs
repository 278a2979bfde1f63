use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use landscope::suitability::{Recommendation, Zoning};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_zoning(raw: &str) -> Result<Zoning, String> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "R-1" | "R1" => Ok(Zoning::R1),
        "R-2" | "R2" => Ok(Zoning::R2),
        "R-3" | "R3" => Ok(Zoning::R3),
        "MU" | "MIXED-USE" | "MIXED_USE" => Ok(Zoning::MixedUse),
        "C-1" | "C1" => Ok(Zoning::C1),
        other => {
            let expected: Vec<&str> = Zoning::ordered().into_iter().map(Zoning::label).collect();
            Err(format!(
                "unknown zoning '{other}' (expected one of {})",
                expected.join(", ")
            ))
        }
    }
}

pub(crate) fn parse_recommendation(raw: &str) -> Result<Recommendation, String> {
    match raw
        .trim()
        .to_ascii_uppercase()
        .replace(['-', '_'], " ")
        .as_str()
    {
        "STRONG BUY" => Ok(Recommendation::StrongBuy),
        "BUY" => Ok(Recommendation::Buy),
        "CONDITIONAL" => Ok(Recommendation::Conditional),
        "RISKY" => Ok(Recommendation::Risky),
        "AVOID" => Ok(Recommendation::Avoid),
        other => Err(format!(
            "unknown recommendation tier '{other}' (expected STRONG-BUY, BUY, CONDITIONAL, RISKY, or AVOID)"
        )),
    }
}
