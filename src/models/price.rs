use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PriceInfo {
    pub currency: String,
    pub price: f64,
    pub date: String,
}

/// Quotes keyed by currency code. Always built whole and replaced whole.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PriceCache {
    quotes: HashMap<String, PriceInfo>,
}

impl PriceCache {
    pub fn new() -> Self {
        PriceCache {
            quotes: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, currency: &str) -> Option<&PriceInfo> {
        self.quotes.get(currency)
    }

    pub fn price(&self, currency: &str) -> Option<f64> {
        self.quotes.get(currency).map(|info| info.price)
    }

    /// Units of `to` per unit of `from`, as a plain quote ratio.
    pub fn exchange_rate(&self, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return Some(1.0);
        }

        let from_price = self.price(from).filter(|p| *p != 0.0)?;
        let to_price = self.price(to).filter(|p| *p != 0.0)?;

        Some(to_price / from_price)
    }

    pub fn available_currencies(&self) -> Vec<String> {
        let mut currencies: Vec<String> = self.quotes.keys().cloned().collect();

        currencies.sort();

        currencies
    }

    /// Quotes ordered by currency code.
    pub fn sorted(&self) -> Vec<&PriceInfo> {
        let mut list: Vec<&PriceInfo> = self.quotes.values().collect();

        list.sort_by(|a, b| a.currency.cmp(&b.currency));

        list
    }
}

impl FromIterator<PriceInfo> for PriceCache {
    fn from_iter<I: IntoIterator<Item = PriceInfo>>(iter: I) -> Self {
        let quotes = iter
            .into_iter()
            .map(|info| (info.currency.clone(), info))
            .collect();

        PriceCache { quotes }
    }
}
