use actix_web::{
    get,
    web::{self, ServiceConfig},
    HttpResponse, Responder,
};
use tracing::{error, info};

use crate::aggregator::aggregate;
use crate::cache::{RedisCache, CACHE_TTL_SECS};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::StockSummary;
use crate::utils::{alphavantage::AlphaVantage, parse_i64};

/// Checks the configured inputs before any I/O happens. Returns
/// `(symbol, ndays, api_key)` ready for the retrieval pipeline.
pub fn validate_request(config: &Config) -> Result<(String, usize, String), AppError> {
    if config.symbol.is_empty() {
        return Err(AppError::MissingConfig("SYMBOL"));
    }
    let ndays = match parse_i64(&config.ndays) {
        Ok(n) if n > 0 => n as usize,
        _ => return Err(AppError::InvalidDayCount(config.ndays.clone())),
    };
    if config.api_key.is_empty() {
        return Err(AppError::MissingConfig("API_KEY"));
    }
    Ok((config.symbol.clone(), ndays, config.api_key.clone()))
}

/// Cache-aside retrieval: read the cache, go upstream on a miss and populate
/// the cache best-effort, then aggregate. A cache read error aborts the
/// request; a cache write error is only logged.
pub async fn retrieve_stock_summary(
    config: &Config,
    cache: &RedisCache,
    upstream: &AlphaVantage,
) -> Result<StockSummary, AppError> {
    let (symbol, ndays, api_key) = validate_request(config)?;

    let series = match cache.get_series(&symbol).await? {
        Some(series) => {
            info!("Cache hit for symbol: {}", symbol);
            series
        }
        None => {
            info!("Cache miss, fetching data for symbol: {}", symbol);
            let series = upstream.fetch_daily_series(&symbol, &api_key).await?;
            if let Err(err) = cache.set_series(&symbol, &series, CACHE_TTL_SECS).await {
                error!("Error caching data for symbol {}: {}", symbol, err);
            }
            series
        }
    };

    Ok(aggregate(&series, ndays))
}

#[get("/stock")]
pub async fn stock(
    config: web::Data<Config>,
    cache: web::Data<RedisCache>,
    upstream: web::Data<AlphaVantage>,
) -> impl Responder {
    info!("Handling /stock request");
    let summary = match retrieve_stock_summary(&config, &cache, &upstream).await {
        Ok(summary) => summary,
        Err(err) => return error_response(err),
    };

    match serde_json::to_string(&summary) {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(err) => error_response(AppError::ResponseEncoding(err.to_string())),
    }
}

fn error_response(err: AppError) -> HttpResponse {
    error!("{}", err);
    HttpResponse::build(err.status_code()).body(err.to_string())
}

pub fn init(config: &mut ServiceConfig) {
    config.service(stock);
}
