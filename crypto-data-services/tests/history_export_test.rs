/// History export tests
///
/// Ensures that:
/// 1. The transform pipeline feeds the CSV writer the expected rows
/// 2. Basic and full exports carry the right header and column counts
/// 3. Windowed statistics that are not yet defined render as empty cells
use crypto_core::analytics::export::ExportSpec;
use crypto_core::analytics::series::transform;
use crypto_core::types::{PricePoint, TimestampMS};
use crypto_data_services::export::write_history_csv;

const DAY_MS: TimestampMS = 86_400_000;

fn sample_series() -> Vec<PricePoint> {
    [100.0, 110.0, 121.0, 108.9]
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint {
            timestamp: 1_700_000_000_000 + i as TimestampMS * DAY_MS,
            price,
        })
        .collect()
}

fn read_rows(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("Failed to read export");
    let header = reader
        .headers()
        .expect("Missing header row")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("Bad record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (header, rows)
}

#[test]
fn test_basic_export() {
    let derived = transform(&sample_series(), false);
    let download =
        write_history_csv("bitcoin", &derived, &ExportSpec::basic()).expect("Export failed");

    assert_eq!(download.filename, "bitcoin_basic_history.csv");
    assert_eq!(download.media_type, "text/csv");

    let (header, rows) = read_rows(&download.path);
    assert_eq!(header, vec!["timestamp", "price"]);
    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert_eq!(row.len(), 2);
    }
    assert_eq!(rows[0][0], "2023-11-14 22:13:20");
    assert_eq!(rows[0][1], "100");
}

#[test]
fn test_full_export() {
    let derived = transform(&sample_series(), true);
    let download =
        write_history_csv("bitcoin", &derived, &ExportSpec::full()).expect("Export failed");

    assert_eq!(download.filename, "bitcoin_full_history.csv");

    let (header, rows) = read_rows(&download.path);
    assert_eq!(
        header,
        vec!["timestamp", "price", "pct_change", "rolling_avg_3d", "volatility_3d"]
    );
    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert_eq!(row.len(), 5);
    }

    // First two rows have no windowed statistics
    assert_eq!(rows[0][2], "");
    assert_eq!(rows[0][3], "");
    assert_eq!(rows[1][3], "");

    assert_eq!(rows[1][2], "10");
    assert_eq!(rows[3][3], "113.3");

    // Volatility needs three defined pct changes
    assert_eq!(rows[2][4], "");
    assert!(!rows[3][4].is_empty());
}

#[test]
fn test_empty_series_export() {
    let download =
        write_history_csv("bitcoin", &[], &ExportSpec::basic()).expect("Export failed");

    let (header, rows) = read_rows(&download.path);
    assert_eq!(header, vec!["timestamp", "price"]);
    assert!(rows.is_empty());
}
