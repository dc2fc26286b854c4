pub mod time_series;

pub use time_series::{DailyQuote, StockSummary, TimeSeriesData, TimeSeriesResponse};
