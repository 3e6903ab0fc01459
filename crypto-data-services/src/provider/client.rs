use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crypto_core::types::{MarketSnapshot, PricePoint};

use super::error::ProviderError;
use super::models::{CoinMarketRow, MarketChart};

/// CoinGecko API base URL.
pub const COINGECKO_API: &str = "https://api.coingecko.com/api/v3";

/// Quote currency for all price data.
const VS_CURRENCY: &str = "usd";

/// CoinGecko client for fetching market snapshots and daily price history.
#[derive(Clone)]
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// Create a new client against the public API.
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        Self::with_base_url(COINGECKO_API, timeout)
    }

    /// Create a new client with a custom base URL.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the current market snapshot for an asset.
    ///
    /// # Arguments
    /// * `asset_id` - Provider-canonical identifier (e.g., "bitcoin")
    pub async fn get_market_summary(&self, asset_id: &str) -> Result<MarketSnapshot, ProviderError> {
        let url = format!("{}/coins/markets", self.base_url);

        debug!("Fetching market summary: {} ids={}", url, asset_id);

        let rows: Vec<CoinMarketRow> = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", VS_CURRENCY),
                ("ids", asset_id),
                ("price_change_percentage", "1h,24h,7d,30d"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // The markets endpoint answers an unknown id with an empty array
        // rather than an error status
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::AssetNotFound(asset_id.to_string()))?;

        info!("Fetched market summary for {}", asset_id);

        Ok(row.into())
    }

    /// Fetch the daily price series for an asset over a lookback window.
    ///
    /// # Arguments
    /// * `asset_id` - Provider-canonical identifier (e.g., "bitcoin")
    /// * `days` - Lookback window in days (validated by the caller)
    pub async fn get_price_history(
        &self,
        asset_id: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, asset_id);

        debug!("Fetching price history: {} days={}", url, days);

        let days = days.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", VS_CURRENCY),
                ("days", days.as_str()),
                ("interval", "daily"),
            ])
            .send()
            .await?;

        // The chart endpoint reports an unknown id as a 404
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProviderError::AssetNotFound(asset_id.to_string()));
        }

        let chart: MarketChart = response.error_for_status()?.json().await?;
        let points = chart.into_price_points();

        info!("Fetched {} daily samples for {}", points.len(), asset_id);

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client =
            CoinGeckoClient::with_base_url("http://localhost:9000/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(client.base_url, "http://localhost:9000");
    }
}
