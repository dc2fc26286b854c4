use actix_web::http::StatusCode;
use thiserror::Error;

/// Everything that can abort a `/stock` request, plus the one failure that
/// never does (`CacheWrite`, which is logged and absorbed by the caller).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} environment variable not set")]
    MissingConfig(&'static str),

    #[error("Invalid NDAYS value: {0}")]
    InvalidDayCount(String),

    #[error("Error fetching stock data: {0}")]
    UpstreamUnavailable(String),

    #[error("No data available for symbol: {0}")]
    UpstreamEmpty(String),

    #[error("Error decoding stock data response: {0}")]
    UpstreamMalformed(String),

    #[error("Error checking cache: {0}")]
    CacheRead(String),

    #[error("Error caching data: {0}")]
    CacheWrite(String),

    #[error("Failed to encode response: {0}")]
    ResponseEncoding(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidDayCount(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
