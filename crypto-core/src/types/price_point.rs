use crate::types::TimestampMS;
use serde::{Deserialize, Serialize};

/// A single (timestamp, price) sample from the provider's daily series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: TimestampMS,
    pub price: f64,
}

/// A price sample enriched with windowed metrics.
///
/// The derived fields are `None` until their window is available:
/// `pct_change` from the second sample, `rolling_avg_3d` from the third,
/// and `volatility_3d` from the fourth (its window must contain three
/// defined `pct_change` values). A non-enriched series carries `None` in
/// every derived field, and `None` fields are omitted from serialized
/// output rather than rendered as null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedPricePoint {
    pub timestamp: TimestampMS,
    pub price: f64,

    /// Percentage change from the preceding sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_change: Option<f64>,

    /// Mean price over this sample and the two preceding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_avg_3d: Option<f64>,

    /// Sample standard deviation of `pct_change` over the same 3-sample window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility_3d: Option<f64>,
}

impl From<PricePoint> for DerivedPricePoint {
    fn from(point: PricePoint) -> Self {
        Self {
            timestamp: point.timestamp,
            price: point.price,
            pct_change: None,
            rolling_avg_3d: None,
            volatility_3d: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_price_point() {
        let point = PricePoint {
            timestamp: 1_700_000_000_000,
            price: 42_000.5,
        };
        let derived = DerivedPricePoint::from(point);
        assert_eq!(derived.timestamp, point.timestamp);
        assert_eq!(derived.price, point.price);
        assert!(derived.pct_change.is_none());
        assert!(derived.rolling_avg_3d.is_none());
        assert!(derived.volatility_3d.is_none());
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let derived = DerivedPricePoint {
            timestamp: 1_700_000_000_000,
            price: 100.0,
            pct_change: None,
            rolling_avg_3d: None,
            volatility_3d: None,
        };

        let json = serde_json::to_string(&derived).unwrap();
        assert!(!json.contains("pct_change"));
        assert!(!json.contains("rolling_avg_3d"));
        assert!(!json.contains("volatility_3d"));
    }

    #[test]
    fn test_present_fields_are_serialized() {
        let derived = DerivedPricePoint {
            timestamp: 1_700_000_000_000,
            price: 100.0,
            pct_change: Some(10.0),
            rolling_avg_3d: None,
            volatility_3d: None,
        };

        let json = serde_json::to_string(&derived).unwrap();
        assert!(json.contains("\"pct_change\":10.0"));
        assert!(!json.contains("rolling_avg_3d"));
    }
}
