use serde::{Deserialize, Serialize};

/// Point-in-time market statistics for one asset, as reported by the
/// provider. Every numeric field may be absent in the source payload, so
/// each is modeled as an explicit `Option` — never as zero or another
/// sentinel default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub current_price: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_percentage_1h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
}

impl MarketSnapshot {
    /// A snapshot with every field absent. Summarization must stay total
    /// even for this input.
    pub fn empty() -> Self {
        Self {
            name: None,
            symbol: None,
            current_price: None,
            high_24h: None,
            low_24h: None,
            price_change_percentage_1h: None,
            price_change_percentage_24h: None,
            price_change_percentage_7d: None,
            price_change_percentage_30d: None,
            market_cap: None,
            total_volume: None,
        }
    }
}

/// Normalized summary served to clients: the snapshot's field set plus the
/// derived 24h volatility ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub current_price: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,

    /// (high_24h - low_24h) / current_price; absent unless all three
    /// inputs are present and current_price is nonzero
    pub volatility_24h_ratio: Option<f64>,

    pub price_change_percentage_1h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MarketSnapshot::empty();
        assert!(snapshot.name.is_none());
        assert!(snapshot.current_price.is_none());
        assert!(snapshot.total_volume.is_none());
    }

    #[test]
    fn test_summary_record_roundtrip() {
        let record = SummaryRecord {
            name: Some("Bitcoin".to_string()),
            symbol: Some("btc".to_string()),
            current_price: Some(50_000.0),
            high_24h: Some(51_000.0),
            low_24h: Some(49_000.0),
            volatility_24h_ratio: Some(0.04),
            price_change_percentage_1h: Some(0.1),
            price_change_percentage_24h: Some(-1.2),
            price_change_percentage_7d: None,
            price_change_percentage_30d: None,
            market_cap: Some(1.0e12),
            total_volume: Some(3.0e10),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: SummaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert!(json.contains("\"volatility_24h_ratio\":0.04"));
    }
}
