use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::errors::AppError;
use crate::models::TimeSeriesResponse;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Alpha Vantage daily time-series client. Built once at startup; the inner
/// reqwest client pools connections and carries the request timeout.
pub struct AlphaVantage {
    client: Client,
    base_url: String,
}

impl AlphaVantage {
    pub fn init(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the daily series for `symbol`. Single attempt, no retry; the
    /// caller decides what to do with a failure.
    pub async fn fetch_daily_series(
        &self,
        symbol: &str,
        api_key: &str,
    ) -> Result<TimeSeriesResponse, AppError> {
        info!("Fetching stock data for symbol: {}", symbol);
        let url = format!(
            "{}/query?apikey={}&function=TIME_SERIES_DAILY&symbol={}",
            self.base_url, api_key, symbol
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        let data: TimeSeriesResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamMalformed(e.to_string()))?;

        if data.time_series.is_empty() {
            return Err(AppError::UpstreamEmpty(symbol.to_string()));
        }

        info!("Stock data fetched successfully for symbol: {}", symbol);
        Ok(data)
    }
}
