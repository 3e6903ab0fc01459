use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use tracing::info;

use crypto_core::analytics::export::{shape, CellValue, ExportSpec};
use crypto_core::types::{DerivedPricePoint, TimestampMS};

/// Media type attached to history downloads.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// A written CSV artifact ready to be served as a download.
#[derive(Debug, Clone)]
pub struct CsvDownload {
    /// Location of the written file in a fresh temp directory
    pub path: PathBuf,
    /// Attachment filename offered to the client
    pub filename: String,
    pub media_type: &'static str,
}

/// Write a shaped history export into a fresh temp directory.
///
/// The header row is exactly the spec's column names; missing windowed
/// values render as empty cells. The returned download carries the
/// client-facing filename `<asset_id>_<basic|full>_history.csv`.
/// Artifacts are ephemeral and left to the OS temp dir for cleanup.
pub fn write_history_csv(
    asset_id: &str,
    series: &[DerivedPricePoint],
    spec: &ExportSpec,
) -> Result<CsvDownload> {
    let dir = tempfile::tempdir()
        .context("Failed to create export directory")?
        .into_path();
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("crypto_history_{}_{}.csv", spec.variant_name(), stamp));

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    writer.write_record(spec.header())?;
    for row in shape(series, spec) {
        writer.write_record(row.iter().map(render_cell))?;
    }
    writer.flush()?;

    info!(
        "Wrote {} {} export rows to {}",
        series.len(),
        spec.variant_name(),
        path.display()
    );

    Ok(CsvDownload {
        path,
        filename: format!("{}_{}_history.csv", asset_id, spec.variant_name()),
        media_type: CSV_MEDIA_TYPE,
    })
}

fn render_cell(cell: &CellValue) -> String {
    match *cell {
        CellValue::Timestamp(ts) => format_timestamp(ts),
        CellValue::Number(value) => value.to_string(),
        CellValue::Missing => String::new(),
    }
}

fn format_timestamp(ts: TimestampMS) -> String {
    match Utc.timestamp_millis_opt(ts as i64).single() {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ts.to_string(),
    }
}
