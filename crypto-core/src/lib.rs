pub mod analytics;
pub mod types;

// Re-export common types
pub use analytics::{shape, summarize, transform, CellValue, ExportColumn, ExportSpec};
pub use types::{AssetId, DerivedPricePoint, MarketSnapshot, PricePoint, SummaryRecord, TimestampMS};
