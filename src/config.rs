use std::env;

/// Process configuration, read once at startup and passed into the app as
/// shared state. `symbol`, `ndays` and `api_key` are carried raw and
/// validated per request in the `/stock` handler.
#[derive(Clone, Debug)]
pub struct Config {
    pub symbol: String,
    pub ndays: String,
    pub api_key: String,
    pub redis_url: String,
    pub upstream_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            symbol: env::var("SYMBOL").unwrap_or_default(),
            ndays: env::var("NDAYS").unwrap_or_default(),
            api_key: env::var("API_KEY").unwrap_or_default(),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379/0".to_string()),
            upstream_base_url: env::var("ALPHAVANTAGE_BASE_URL")
                .unwrap_or_else(|_| "https://www.alphavantage.co".to_string()),
        }
    }
}
