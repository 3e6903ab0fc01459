pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used items
pub use client::{CoinGeckoClient, COINGECKO_API};
pub use error::ProviderError;
