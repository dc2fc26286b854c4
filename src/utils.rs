pub mod alphavantage;

use std::num::{ParseFloatError, ParseIntError};

pub fn parse_f64(input: &str) -> Result<f64, ParseFloatError> {
    input.parse::<f64>()
}

pub fn parse_i64(input: &str) -> Result<i64, ParseIntError> {
    input.parse::<i64>()
}
