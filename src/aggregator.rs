use tracing::warn;

use crate::models::{StockSummary, TimeSeriesData, TimeSeriesResponse};
use crate::utils::parse_f64;

/// Turns a raw daily series into the `ndays` most recent closing prices and
/// their mean. Entries whose close does not parse as a float are dropped.
pub fn aggregate(series: &TimeSeriesResponse, ndays: usize) -> StockSummary {
    let mut closing_prices: Vec<TimeSeriesData> = series
        .time_series
        .iter()
        .filter_map(|(date, quote)| match parse_f64(&quote.close) {
            Ok(price) => Some(TimeSeriesData {
                date: date.clone(),
                close_price: price,
            }),
            Err(err) => {
                warn!("Error parsing close price for date {}: {}", date, err);
                None
            }
        })
        .collect();

    // ISO-8601 dates sort lexicographically, latest first.
    closing_prices.sort_by(|a, b| b.date.cmp(&a.date));
    closing_prices.truncate(ndays);

    let average_price = calculate_average(&closing_prices);
    StockSummary {
        closing_prices,
        average_price,
    }
}

/// Mean closing price; an empty slice yields 0.0, never NaN.
pub fn calculate_average(data: &[TimeSeriesData]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let total: f64 = data.iter().map(|entry| entry.close_price).sum();
    total / data.len() as f64
}
