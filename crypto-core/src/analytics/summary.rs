use crate::types::{MarketSnapshot, SummaryRecord};

/// 24-hour volatility ratio: (high - low) / current price.
///
/// Defined only when all three inputs are present and the current price is
/// nonzero; a zero or absent price yields `None`, never an error.
pub fn volatility_24h_ratio(
    high_24h: Option<f64>,
    low_24h: Option<f64>,
    current_price: Option<f64>,
) -> Option<f64> {
    match (high_24h, low_24h, current_price) {
        (Some(high), Some(low), Some(current)) if current != 0.0 => Some((high - low) / current),
        _ => None,
    }
}

/// Normalize a raw market snapshot into a summary record.
///
/// Provider-reported fields pass through unmodified; the only derived field
/// is the 24h volatility ratio. Total for any snapshot, including one with
/// every field absent.
pub fn summarize(snapshot: &MarketSnapshot) -> SummaryRecord {
    SummaryRecord {
        name: snapshot.name.clone(),
        symbol: snapshot.symbol.clone(),
        current_price: snapshot.current_price,
        high_24h: snapshot.high_24h,
        low_24h: snapshot.low_24h,
        volatility_24h_ratio: volatility_24h_ratio(
            snapshot.high_24h,
            snapshot.low_24h,
            snapshot.current_price,
        ),
        price_change_percentage_1h: snapshot.price_change_percentage_1h,
        price_change_percentage_24h: snapshot.price_change_percentage_24h,
        price_change_percentage_7d: snapshot.price_change_percentage_7d,
        price_change_percentage_30d: snapshot.price_change_percentage_30d,
        market_cap: snapshot.market_cap,
        total_volume: snapshot.total_volume,
    }
}
