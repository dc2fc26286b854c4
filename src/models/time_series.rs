use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Daily time-series envelope as returned by Alpha Vantage. This exact
/// shape is what gets cached: closes stay raw strings until aggregation,
/// whether the series came from the provider or from the cache.
///
/// `default` on the map makes a non-matching JSON shape (e.g. the provider's
/// rate-limit note) decode as an empty series instead of a parse failure, so
/// callers must check for emptiness themselves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeSeriesResponse {
    #[serde(rename = "Time Series (Daily)", default)]
    pub time_series: HashMap<String, DailyQuote>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyQuote {
    #[serde(rename = "4. close")]
    pub close: String,
}

/// One closing price with its quote date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeSeriesData {
    pub date: String,
    #[serde(rename = "close")]
    pub close_price: f64,
}

/// Response body of `GET /stock`.
#[derive(Serialize, Deserialize, Debug)]
pub struct StockSummary {
    pub closing_prices: Vec<TimeSeriesData>,
    pub average_price: f64,
}
