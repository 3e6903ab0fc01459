use crate::types::{DerivedPricePoint, PricePoint};

/// Enrich an ordered daily price series with windowed metrics.
///
/// The input is assumed sorted ascending by timestamp; ordering is
/// preserved and never re-sorted here. With `enrich` off the output
/// degenerates to the raw samples. With it on, each point gains:
///
/// - `pct_change`: percentage change from the preceding sample
/// - `rolling_avg_3d`: mean price over a trailing 3-sample window
/// - `volatility_3d`: sample standard deviation of `pct_change` over the
///   same window; a window containing an undefined `pct_change` yields an
///   undefined result rather than a statistic over fewer points
pub fn transform(series: &[PricePoint], enrich: bool) -> Vec<DerivedPricePoint> {
    let mut derived: Vec<DerivedPricePoint> =
        series.iter().map(|&point| point.into()).collect();

    if !enrich {
        return derived;
    }

    for i in 1..derived.len() {
        let prev = series[i - 1].price;
        derived[i].pct_change = Some((series[i].price - prev) / prev * 100.0);
    }

    for i in 2..derived.len() {
        let prices = [series[i - 2].price, series[i - 1].price, series[i].price];
        derived[i].rolling_avg_3d = Some(prices.iter().sum::<f64>() / 3.0);

        derived[i].volatility_3d = match (
            derived[i - 2].pct_change,
            derived[i - 1].pct_change,
            derived[i].pct_change,
        ) {
            (Some(a), Some(b), Some(c)) => Some(sample_std_dev(&[a, b, c])),
            _ => None,
        };
    }

    derived
}

/// Sample standard deviation (n - 1 denominator) of a window of values
fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    variance.sqrt()
}
