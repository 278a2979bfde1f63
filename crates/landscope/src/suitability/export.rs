use std::io::Write;

use super::portfolio::ScoredParcel;

/// Failure while serializing a parcel set to CSV.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error while writing export: {0}")]
    Io(#[from] std::io::Error),
}

const HEADERS: [&str; 17] = [
    "parcel_id",
    "latitude",
    "longitude",
    "total_acres",
    "flood_acres",
    "wetland_acres",
    "slope_acres",
    "setback_acres",
    "buildable_acres",
    "buildable_ratio_pct",
    "suitability_score",
    "score_breakdown",
    "recommendation",
    "zoning",
    "cost_per_acre",
    "total_cost",
    "elevation_ft",
];

/// Write one header row plus one row per scored parcel, preserving order.
pub fn write_csv<W: Write>(scored: &[&ScoredParcel], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for entry in scored {
        let parcel = &entry.parcel;
        let result = &entry.result;
        let m = &parcel.measurement;

        csv_writer.write_record([
            parcel.id.0.clone(),
            format!("{:.5}", parcel.latitude),
            format!("{:.5}", parcel.longitude),
            format!("{:.2}", m.total_acres),
            format!("{:.2}", m.flood_acres),
            format!("{:.2}", m.wetland_acres),
            format!("{:.2}", m.slope_acres),
            format!("{:.2}", m.setback_acres),
            format!("{:.2}", result.buildable_acres),
            format!("{:.1}", result.buildable_ratio * 100.0),
            result.score.to_string(),
            result.breakdown_label(),
            result.recommendation.label().to_string(),
            parcel.zoning.label().to_string(),
            format!("{:.0}", parcel.cost_per_acre),
            format!("{:.0}", parcel.total_cost()),
            parcel.elevation_ft.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Convenience wrapper returning the export as an owned string, for HTTP
/// responses and download buttons.
pub fn to_csv_string(scored: &[&ScoredParcel]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(scored, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| {
        ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}
