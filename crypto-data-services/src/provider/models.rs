use crypto_core::types::{MarketSnapshot, PricePoint, TimestampMS};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One row of the provider's `/coins/markets` response.
///
/// The payload is dictionary-shaped and loosely typed; every numeric field
/// is run through a lenient deserializer here so the core only ever sees a
/// statically-typed snapshot with explicit absent markers.
#[derive(Debug, Deserialize)]
pub struct CoinMarketRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub high_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub low_24h: Option<f64>,
    #[serde(
        rename = "price_change_percentage_1h_in_currency",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub price_change_percentage_1h: Option<f64>,
    #[serde(
        rename = "price_change_percentage_24h_in_currency",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(
        rename = "price_change_percentage_7d_in_currency",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(
        rename = "price_change_percentage_30d_in_currency",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub price_change_percentage_30d: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_volume: Option<f64>,
}

impl From<CoinMarketRow> for MarketSnapshot {
    fn from(row: CoinMarketRow) -> Self {
        MarketSnapshot {
            name: row.name,
            symbol: row.symbol,
            current_price: row.current_price,
            high_24h: row.high_24h,
            low_24h: row.low_24h,
            price_change_percentage_1h: row.price_change_percentage_1h,
            price_change_percentage_24h: row.price_change_percentage_24h,
            price_change_percentage_7d: row.price_change_percentage_7d,
            price_change_percentage_30d: row.price_change_percentage_30d,
            market_cap: row.market_cap,
            total_volume: row.total_volume,
        }
    }
}

/// The provider's `/coins/{id}/market_chart` response. `prices` is an
/// array of `[timestamp_ms, price]` pairs; timestamps may arrive as
/// integers or floats.
#[derive(Debug, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<(f64, f64)>,
}

impl MarketChart {
    pub fn into_price_points(self) -> Vec<PricePoint> {
        self.prices
            .into_iter()
            .map(|(timestamp, price)| PricePoint {
                timestamp: timestamp as TimestampMS,
                price,
            })
            .collect()
    }
}

/// Accept a JSON number, map anything else (missing, null, string, bool)
/// to an absent value instead of a parse error.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}
