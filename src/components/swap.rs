use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::{
    config::swap::{AMOUNT_PATTERN, MAX_SWAP_AMOUNT, QUOTE_DECIMALS},
    models::price::PriceCache,
};

static AMOUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AMOUNT_PATTERN).expect("Invalid amount regex"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SwapError {
    #[error("Please enter a valid number")]
    InvalidNumber,

    #[error("Amount exceeds maximum limit (1,000,000)")]
    ExceedsLimit,

    #[error("Please enter a valid amount")]
    MissingAmount,

    #[error("Please select different currencies")]
    SameCurrency,

    #[error("Exchange rate not available for selected currencies")]
    RateUnavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub rate: f64,
    pub to_amount: String,
}

/// Parses a user-entered amount. An empty field is not an error, just no amount yet.
pub fn parse_amount(input: &str) -> Result<Option<f64>, SwapError> {
    if input.is_empty() {
        return Ok(None);
    }

    if !AMOUNT_REGEX.is_match(input) {
        return Err(SwapError::InvalidNumber);
    }

    let amount: f64 = input.parse().map_err(|_| SwapError::InvalidNumber)?;

    if amount > MAX_SWAP_AMOUNT {
        return Err(SwapError::ExceedsLimit);
    }

    Ok(Some(amount))
}

pub fn validate_submission(amount: Option<f64>, from: &str, to: &str) -> Result<f64, SwapError> {
    let amount = match amount {
        Some(amount) if amount > 0.0 => amount,
        _ => return Err(SwapError::MissingAmount),
    };

    if from == to {
        return Err(SwapError::SameCurrency);
    }

    Ok(amount)
}

pub fn quote(prices: &PriceCache, from: &str, to: &str, amount: f64) -> Result<SwapQuote, SwapError> {
    let rate = prices
        .exchange_rate(from, to)
        .ok_or(SwapError::RateUnavailable)?;

    Ok(SwapQuote {
        from: from.to_string(),
        to: to.to_string(),
        amount,
        rate,
        to_amount: format!("{:.*}", QUOTE_DECIMALS, amount * rate),
    })
}
