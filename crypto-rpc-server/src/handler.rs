use std::sync::Arc;
use std::time::Instant;

use chrono::{TimeZone, Utc};

use crypto_core::analytics::export::ExportSpec;
use crypto_core::analytics::series::transform;
use crypto_core::analytics::summary::summarize;
use crypto_core::types::{DerivedPricePoint, SummaryRecord, TimestampMS};
use crypto_data_services::export::write_history_csv;
use crypto_data_services::provider::CoinGeckoClient;

use crate::error::RpcError;
use crate::protocol::*;

/// Handler for market data queries
pub struct MarketDataHandler {
    client: Arc<CoinGeckoClient>,
}

impl MarketDataHandler {
    pub fn new(client: Arc<CoinGeckoClient>) -> Self {
        Self { client }
    }

    /// Handle a crypto.get_summary request
    pub async fn handle_summary(&self, params: SummaryRequest) -> Result<SummaryRecord, RpcError> {
        let start = Instant::now();
        let asset_id = normalize_asset_id(&params.asset_id);

        tracing::debug!("Handling summary query: asset_id={}", asset_id);

        let snapshot = self.client.get_market_summary(&asset_id).await?;
        let summary = summarize(&snapshot);

        tracing::info!(
            "Summary query completed: asset_id={}, duration={}ms",
            asset_id,
            start.elapsed().as_millis()
        );

        Ok(summary)
    }

    /// Handle a crypto.get_history request
    pub async fn handle_history(&self, params: HistoryRequest) -> Result<HistoryResponse, RpcError> {
        let start = Instant::now();
        let asset_id = normalize_asset_id(&params.asset_id);
        validate_days(params.days)?;

        tracing::debug!(
            "Handling history query: asset_id={}, days={}, include_pct_change={}",
            asset_id,
            params.days,
            params.include_pct_change
        );

        let series = self.client.get_price_history(&asset_id, params.days).await?;
        let derived = transform(&series, params.include_pct_change);
        let points = derived.iter().map(to_history_point).collect();

        tracing::info!(
            "History query completed: asset_id={}, samples={}, duration={}ms",
            asset_id,
            derived.len(),
            start.elapsed().as_millis()
        );

        Ok(HistoryResponse {
            asset_id,
            days: params.days,
            points,
        })
    }

    /// Handle a crypto.download_basic or crypto.download_full request
    pub async fn handle_download(
        &self,
        params: DownloadRequest,
        spec: ExportSpec,
    ) -> Result<DownloadResponse, RpcError> {
        let start = Instant::now();
        let asset_id = normalize_asset_id(&params.asset_id);
        validate_days(params.days)?;

        tracing::debug!(
            "Handling {} download: asset_id={}, days={}",
            spec.variant_name(),
            asset_id,
            params.days
        );

        let series = self.client.get_price_history(&asset_id, params.days).await?;
        let derived = transform(&series, spec.enriched);
        let download = write_history_csv(&asset_id, &derived, &spec)
            .map_err(|e| RpcError::ExportFailed(e.to_string()))?;

        tracing::info!(
            "{} download completed: asset_id={}, rows={}, duration={}ms",
            spec.variant_name(),
            asset_id,
            derived.len(),
            start.elapsed().as_millis()
        );

        Ok(DownloadResponse {
            filename: download.filename,
            media_type: download.media_type.to_string(),
            path: download.path.display().to_string(),
            rows: derived.len(),
        })
    }
}

/// Case-fold and trim a caller-supplied asset identifier
fn normalize_asset_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reject lookback windows outside the allowed range before any fetch runs
fn validate_days(days: u32) -> Result<(), RpcError> {
    if !(MIN_LOOKBACK_DAYS..=MAX_LOOKBACK_DAYS).contains(&days) {
        return Err(RpcError::InvalidParams(format!(
            "days must be within {}..={}, got {}",
            MIN_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS, days
        )));
    }
    Ok(())
}

fn to_history_point(point: &DerivedPricePoint) -> HistoryPointJson {
    HistoryPointJson {
        timestamp: point.timestamp,
        date: format_timestamp(point.timestamp),
        price: point.price,
        pct_change: point.pct_change,
        rolling_avg_3d: point.rolling_avg_3d,
        volatility_3d: point.volatility_3d,
    }
}

fn format_timestamp(ts: TimestampMS) -> String {
    match Utc.timestamp_millis_opt(ts as i64).single() {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ts.to_string(),
    }
}
