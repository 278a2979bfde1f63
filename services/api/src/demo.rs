use std::collections::BTreeSet;
use std::fs::File;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use landscope::error::AppError;
use landscope::suitability::export::write_csv;
use landscope::suitability::report::views::PortfolioInsights;
use landscope::suitability::report::PortfolioSummary;
use landscope::suitability::sample::{generate, SampleConfig};
use landscope::suitability::{
    score_portfolio, ParcelFilter, ParcelMeasurement, Recommendation, ScoredParcel, ScoringConfig,
    SuitabilityEngine, Zoning,
};

#[derive(Args, Debug)]
pub(crate) struct PortfolioReportArgs {
    /// Seed for the synthetic parcel set
    #[arg(long, default_value_t = SampleConfig::default().seed)]
    pub(crate) seed: u64,
    /// Number of parcels to generate
    #[arg(long, default_value_t = SampleConfig::default().count)]
    pub(crate) count: usize,
    /// Minimum buildable acreage a parcel must retain to qualify
    #[arg(long, default_value_t = 2.0)]
    pub(crate) min_buildable: f64,
    /// Maximum total parcel cost in dollars
    #[arg(long)]
    pub(crate) max_cost: Option<f64>,
    /// Restrict to zoning designations (repeatable; e.g. --zoning R-1 --zoning MU)
    #[arg(long, value_parser = crate::infra::parse_zoning)]
    pub(crate) zoning: Vec<Zoning>,
    /// Restrict to recommendation tiers (repeatable; defaults to STRONG-BUY, BUY, CONDITIONAL)
    #[arg(long = "tier", value_parser = crate::infra::parse_recommendation)]
    pub(crate) tiers: Vec<Recommendation>,
    /// Number of top parcels to list
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
    /// Write the filtered selection to a CSV file at this path
    #[arg(long)]
    pub(crate) csv_out: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the synthetic parcel set
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of parcels to generate
    #[arg(long)]
    pub(crate) count: Option<usize>,
    /// Skip the portfolio screening portion of the demo
    #[arg(long)]
    pub(crate) skip_portfolio: bool,
}

pub(crate) fn run_portfolio_report(args: PortfolioReportArgs) -> Result<(), AppError> {
    let PortfolioReportArgs {
        seed,
        count,
        min_buildable,
        max_cost,
        zoning,
        tiers,
        top,
        csv_out,
    } = args;

    let filter = build_filter(min_buildable, max_cost, zoning, tiers);
    let engine = SuitabilityEngine::new(ScoringConfig::default());
    let portfolio = score_portfolio(&engine, generate(SampleConfig { seed, count }));

    let selected = filter.apply(&portfolio.scored);
    let summary = PortfolioSummary::from_selection(&selected);
    let insights = summary.insights(&selected, portfolio.screened());

    render_portfolio_report(&summary, &insights, &selected, top);

    if let Some(path) = csv_out {
        let file = File::create(&path)?;
        write_csv(&selected, file)?;
        println!("\nExported {} parcels to {}", selected.len(), path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        count,
        skip_portfolio,
    } = args;

    println!("Parcel suitability demo");

    println!("\nSingle-parcel evaluation");
    let engine = SuitabilityEngine::new(ScoringConfig::default());
    let reference = ParcelMeasurement {
        total_acres: 10.0,
        flood_acres: 0.0,
        wetland_acres: 0.0,
        slope_acres: 0.0,
        setback_acres: 0.5,
    };
    let result = engine.score(&reference)?;
    println!(
        "- 10.00 acre parcel with a 0.50 acre setback -> {:.2} buildable acres ({:.0}% of total)",
        result.buildable_acres,
        result.buildable_ratio * 100.0
    );
    println!(
        "- Suitability {}/100 -> {}",
        result.score,
        result.recommendation.label()
    );
    println!("  Score components:");
    for component in &result.breakdown {
        println!(
            "    - {}: {:.1}/{:.0} ({})",
            component.factor.label(),
            component.points,
            component.points_possible,
            component.notes
        );
    }

    if skip_portfolio {
        return Ok(());
    }

    let sample = SampleConfig {
        seed: seed.unwrap_or_else(|| SampleConfig::default().seed),
        count: count.unwrap_or_else(|| SampleConfig::default().count),
    };

    println!("\nPortfolio screening ({} parcels, seed {})", sample.count, sample.seed);
    let portfolio = score_portfolio(&engine, generate(sample));
    let filter = build_filter(2.0, None, Vec::new(), Vec::new());
    let selected = filter.apply(&portfolio.scored);
    let summary = PortfolioSummary::from_selection(&selected);
    let insights = summary.insights(&selected, portfolio.screened());

    render_portfolio_report(&summary, &insights, &selected, 5);
    println!("\nAnalysis run: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    Ok(())
}

fn build_filter(
    min_buildable: f64,
    max_cost: Option<f64>,
    zoning: Vec<Zoning>,
    tiers: Vec<Recommendation>,
) -> ParcelFilter {
    let zoning = if zoning.is_empty() {
        None
    } else {
        Some(zoning.into_iter().collect::<BTreeSet<_>>())
    };

    // Screening defaults to the purchase-worthy tiers, matching the report UI.
    let tiers = if tiers.is_empty() {
        vec![
            Recommendation::StrongBuy,
            Recommendation::Buy,
            Recommendation::Conditional,
        ]
    } else {
        tiers
    };

    ParcelFilter {
        min_buildable_acres: min_buildable,
        max_total_cost: max_cost,
        zoning,
        recommendations: Some(tiers.into_iter().collect()),
    }
}

fn render_portfolio_report(
    summary: &PortfolioSummary,
    insights: &PortfolioInsights,
    selected: &[&ScoredParcel],
    top: usize,
) {
    println!(
        "- {} qualified parcels | avg suitability {:.0}/100",
        summary.qualified, summary.avg_score
    );
    println!(
        "- Avg buildable {:.1} ac ({:.0}% of avg total) | total buildable {:.1} ac (~{:.0} sq ft)",
        summary.avg_buildable_acres,
        if summary.avg_total_acres > 0.0 {
            summary.avg_buildable_acres / summary.avg_total_acres * 100.0
        } else {
            0.0
        },
        summary.total_buildable_acres,
        summary.total_buildable_sqft
    );

    println!("Recommendation mix:");
    for entry in &summary.tier_counts {
        println!("  - {}: {} parcels", entry.label, entry.count);
    }

    println!("Constraint breakdown:");
    for entry in &summary.constraints {
        println!(
            "  - {}: {:.1} ac across {} parcels",
            entry.label, entry.total_acres, entry.parcels_affected
        );
    }

    if !selected.is_empty() && top > 0 {
        let mut ranked: Vec<&ScoredParcel> = selected.to_vec();
        ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        println!("Top parcels:");
        for entry in ranked.iter().take(top) {
            println!(
                "  - {} | {}/100 {} | {:.1} of {:.1} ac buildable | {} | ${:.0}",
                entry.parcel.id.0,
                entry.result.score,
                entry.result.recommendation.label(),
                entry.result.buildable_acres,
                entry.parcel.measurement.total_acres,
                entry.parcel.zoning.label(),
                entry.parcel.total_cost()
            );
        }
    }

    println!("Insights:");
    for line in insights.narrative() {
        println!("  {line}");
    }
}
