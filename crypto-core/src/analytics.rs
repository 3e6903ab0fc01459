pub mod export;
pub mod series;
pub mod summary;

// Re-export commonly used items
pub use export::{shape, CellValue, ExportColumn, ExportSpec};
pub use series::transform;
pub use summary::{summarize, volatility_24h_ratio};
