pub mod market_snapshot;
pub mod price_point;

// Re-export common types
pub use market_snapshot::{MarketSnapshot, SummaryRecord};
pub use price_point::{DerivedPricePoint, PricePoint};

/// Timestamp in milliseconds since Unix epoch
pub type TimestampMS = u64;

/// Provider-canonical asset identifier (e.g., "bitcoin", "ethereum")
pub type AssetId = String;
