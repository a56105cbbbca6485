use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::{
    models::price::{PriceCache, PriceInfo},
    utils::serialization::de_f64_flexible,
};

#[derive(Error, Debug)]
pub enum PriceFetchError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch prices: {0}")]
    Status(StatusCode),

    #[error("Invalid price response: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, PriceFetchError>;

#[derive(Debug, Deserialize)]
struct PriceRecord {
    currency: String,
    date: String,
    #[serde(deserialize_with = "de_f64_flexible")]
    price: f64,
}

#[derive(Debug, Clone)]
pub struct PriceFetcher {
    client: Client,
    url: String,
}

impl PriceFetcher {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(PriceFetcher {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<PriceCache> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(PriceFetchError::Status(status));
        }

        let body = response.bytes().await?;

        parse_prices(&body)
    }
}

/// Validates a raw price list. One bad record rejects the whole list.
pub fn parse_prices(body: &[u8]) -> Result<PriceCache> {
    let records: Vec<PriceRecord> =
        serde_json::from_slice(body).map_err(|e| PriceFetchError::Schema(e.to_string()))?;

    let cache = records
        .into_iter()
        .map(|record| PriceInfo {
            currency: record.currency,
            price: record.price,
            date: record.date,
        })
        .collect();

    Ok(cache)
}
