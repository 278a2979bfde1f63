use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use landscope::error::AppError;
use landscope::suitability::export::to_csv_string;
use landscope::suitability::report::views::PortfolioInsights;
use landscope::suitability::report::PortfolioSummary;
use landscope::suitability::sample::{generate, SampleConfig};
use landscope::suitability::scoring::ScoreComponent;
use landscope::suitability::{
    score_portfolio, Parcel, ParcelFilter, ParcelMeasurement, Portfolio, Recommendation,
    ScoringConfig, SuitabilityEngine,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) measurement: ParcelMeasurement,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) buildable_acres: f64,
    pub(crate) buildable_ratio: f64,
    pub(crate) score: u8,
    pub(crate) recommendation: Recommendation,
    pub(crate) recommendation_label: &'static str,
    pub(crate) breakdown: Vec<ScoreComponent>,
    pub(crate) breakdown_label: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PortfolioRequest {
    /// Seeded synthetic dataset parameters; ignored when `parcels` is given.
    #[serde(default)]
    pub(crate) sample: Option<SampleConfig>,
    /// Inline parcel records supplied by the caller.
    #[serde(default)]
    pub(crate) parcels: Option<Vec<Parcel>>,
    #[serde(default)]
    pub(crate) filter: Option<ParcelFilter>,
    #[serde(default)]
    pub(crate) include_parcels: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct PortfolioReportResponse {
    pub(crate) data_source: PortfolioDataSource,
    pub(crate) screened: usize,
    pub(crate) rejected: usize,
    pub(crate) summary: PortfolioSummary,
    pub(crate) insights: PortfolioInsights,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parcels: Option<Vec<ParcelRowView>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PortfolioDataSource {
    Sample,
    Inline,
}

/// Flattened row for table rendering.
#[derive(Debug, Serialize)]
pub(crate) struct ParcelRowView {
    pub(crate) parcel_id: String,
    pub(crate) total_acres: f64,
    pub(crate) buildable_acres: f64,
    pub(crate) score: u8,
    pub(crate) recommendation_label: &'static str,
    pub(crate) map_color: [u8; 4],
    pub(crate) zoning_label: &'static str,
    pub(crate) total_cost: f64,
    pub(crate) score_breakdown: String,
}

pub(crate) fn with_portfolio_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/parcels/score",
            axum::routing::post(score_parcel_endpoint),
        )
        .route(
            "/api/v1/portfolio/report",
            axum::routing::post(portfolio_report_endpoint),
        )
        .route(
            "/api/v1/portfolio/export",
            axum::routing::post(portfolio_export_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_parcel_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let engine = SuitabilityEngine::new(ScoringConfig::default());
    let result = engine.score(&payload.measurement)?;

    Ok(Json(ScoreResponse {
        buildable_acres: result.buildable_acres,
        buildable_ratio: result.buildable_ratio,
        score: result.score,
        recommendation: result.recommendation,
        recommendation_label: result.recommendation.label(),
        breakdown_label: result.breakdown_label(),
        breakdown: result.breakdown,
    }))
}

pub(crate) async fn portfolio_report_endpoint(
    Json(payload): Json<PortfolioRequest>,
) -> Result<Json<PortfolioReportResponse>, AppError> {
    let filter = payload.filter.clone().unwrap_or_default();
    let include_parcels = payload.include_parcels;
    let (portfolio, data_source) = resolve_portfolio(payload);

    let selected = filter.apply(&portfolio.scored);
    let summary = PortfolioSummary::from_selection(&selected);
    let insights = summary.insights(&selected, portfolio.screened());

    let parcels = include_parcels.then(|| {
        selected
            .iter()
            .map(|entry| ParcelRowView {
                parcel_id: entry.parcel.id.0.clone(),
                total_acres: entry.parcel.measurement.total_acres,
                buildable_acres: entry.result.buildable_acres,
                score: entry.result.score,
                recommendation_label: entry.result.recommendation.label(),
                map_color: entry.result.recommendation.map_color(),
                zoning_label: entry.parcel.zoning.label(),
                total_cost: entry.parcel.total_cost(),
                score_breakdown: entry.result.breakdown_label(),
            })
            .collect()
    });

    Ok(Json(PortfolioReportResponse {
        data_source,
        screened: portfolio.screened(),
        rejected: portfolio.rejected.len(),
        summary,
        insights,
        parcels,
    }))
}

pub(crate) async fn portfolio_export_endpoint(
    Json(payload): Json<PortfolioRequest>,
) -> Result<impl IntoResponse, AppError> {
    let filter = payload.filter.clone().unwrap_or_default();
    let (portfolio, _) = resolve_portfolio(payload);

    let selected = filter.apply(&portfolio.scored);
    let csv = to_csv_string(&selected)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv")],
        csv,
    ))
}

fn resolve_portfolio(payload: PortfolioRequest) -> (Portfolio, PortfolioDataSource) {
    let engine = SuitabilityEngine::new(ScoringConfig::default());

    if let Some(parcels) = payload.parcels {
        (score_portfolio(&engine, parcels), PortfolioDataSource::Inline)
    } else {
        let sample = payload.sample.unwrap_or_default();
        (
            score_portfolio(&engine, generate(sample)),
            PortfolioDataSource::Sample,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(include_parcels: bool) -> PortfolioRequest {
        PortfolioRequest {
            sample: Some(SampleConfig { seed: 42, count: 40 }),
            parcels: None,
            filter: None,
            include_parcels,
        }
    }

    #[tokio::test]
    async fn score_endpoint_scores_the_reference_parcel() {
        let request = ScoreRequest {
            measurement: ParcelMeasurement {
                total_acres: 10.0,
                flood_acres: 0.0,
                wetland_acres: 0.0,
                slope_acres: 0.0,
                setback_acres: 0.5,
            },
        };

        let Json(body) = score_parcel_endpoint(Json(request))
            .await
            .expect("measurement scores");

        assert_eq!(body.score, 89);
        assert_eq!(body.recommendation_label, "STRONG BUY");
        assert_eq!(body.breakdown.len(), 4);
    }

    #[tokio::test]
    async fn score_endpoint_rejects_zero_acreage() {
        let request = ScoreRequest {
            measurement: ParcelMeasurement {
                total_acres: 0.0,
                flood_acres: 0.0,
                wetland_acres: 0.0,
                slope_acres: 0.0,
                setback_acres: 0.0,
            },
        };

        let err = score_parcel_endpoint(Json(request))
            .await
            .expect_err("zero total acres must be rejected");
        assert!(matches!(err, AppError::Scoring(_)));
    }

    #[tokio::test]
    async fn report_endpoint_summarizes_the_sample_set() {
        let Json(body) = portfolio_report_endpoint(Json(sample_request(false)))
            .await
            .expect("report builds");

        assert_eq!(body.data_source, PortfolioDataSource::Sample);
        assert_eq!(body.screened, 40);
        assert_eq!(body.rejected, 0);
        assert_eq!(body.summary.tier_counts.len(), 5);
        assert!(body.parcels.is_none());
        assert!(body.insights.top_parcel.is_some());
    }

    #[tokio::test]
    async fn report_endpoint_can_include_parcel_rows() {
        let Json(body) = portfolio_report_endpoint(Json(sample_request(true)))
            .await
            .expect("report builds");

        let rows = body.parcels.expect("rows returned");
        assert_eq!(rows.len(), body.summary.qualified);
        assert!(rows[0].parcel_id.starts_with("APN-"));

        let tier = Recommendation::ordered()
            .into_iter()
            .find(|tier| tier.label() == rows[0].recommendation_label)
            .expect("row label names a tier");
        assert_eq!(rows[0].map_color, tier.map_color());
    }

    #[tokio::test]
    async fn export_endpoint_returns_csv_with_header() {
        let response = portfolio_export_endpoint(Json(sample_request(false)))
            .await
            .expect("export builds")
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content type set");
        assert_eq!(content_type, "text/csv");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let text = String::from_utf8(bytes.to_vec()).expect("utf-8 csv");
        assert!(text.starts_with("parcel_id,latitude,longitude"));
        assert_eq!(text.lines().count(), 41);
    }
}
