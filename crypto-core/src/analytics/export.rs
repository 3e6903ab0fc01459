use crate::types::{DerivedPricePoint, TimestampMS};

/// A column of the tabular history export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportColumn {
    Timestamp,
    Price,
    PctChange,
    RollingAvg3d,
    Volatility3d,
}

impl ExportColumn {
    /// Header name as written to the export
    pub fn name(&self) -> &'static str {
        match self {
            ExportColumn::Timestamp => "timestamp",
            ExportColumn::Price => "price",
            ExportColumn::PctChange => "pct_change",
            ExportColumn::RollingAvg3d => "rolling_avg_3d",
            ExportColumn::Volatility3d => "volatility_3d",
        }
    }
}

/// Column selection for a tabular export. Two fixed variants exist:
/// `basic` (timestamp, price) and `full` (all derived columns). A `full`
/// spec must only be paired with an enriched series; missing columns are
/// never backfilled here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSpec {
    pub columns: Vec<ExportColumn>,
    pub enriched: bool,
}

impl ExportSpec {
    pub fn basic() -> Self {
        Self {
            columns: vec![ExportColumn::Timestamp, ExportColumn::Price],
            enriched: false,
        }
    }

    pub fn full() -> Self {
        Self {
            columns: vec![
                ExportColumn::Timestamp,
                ExportColumn::Price,
                ExportColumn::PctChange,
                ExportColumn::RollingAvg3d,
                ExportColumn::Volatility3d,
            ],
            enriched: true,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        if self.enriched {
            "full"
        } else {
            "basic"
        }
    }

    /// Header row for the export
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name()).collect()
    }
}

/// A single cell of a shaped row. Rendering (timestamp format, numeric
/// precision, empty-cell encoding) belongs to the export writer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Timestamp(TimestampMS),
    Number(f64),
    Missing,
}

/// Project a derived series onto exactly the columns named by `spec`,
/// in order. Absent derived values become `CellValue::Missing`.
pub fn shape(series: &[DerivedPricePoint], spec: &ExportSpec) -> Vec<Vec<CellValue>> {
    series
        .iter()
        .map(|point| {
            spec.columns
                .iter()
                .map(|column| match column {
                    ExportColumn::Timestamp => CellValue::Timestamp(point.timestamp),
                    ExportColumn::Price => CellValue::Number(point.price),
                    ExportColumn::PctChange => optional_cell(point.pct_change),
                    ExportColumn::RollingAvg3d => optional_cell(point.rolling_avg_3d),
                    ExportColumn::Volatility3d => optional_cell(point.volatility_3d),
                })
                .collect()
        })
        .collect()
}

fn optional_cell(value: Option<f64>) -> CellValue {
    match value {
        Some(v) => CellValue::Number(v),
        None => CellValue::Missing,
    }
}
