use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the public prices document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPrice {
    pub currency: String,
    #[serde(default)]
    pub date: Option<String>,
    pub price: f64,
}

/// Point-in-time snapshot of unit USD prices by currency
///
/// A table is never patched in place. Every refresh from a price source
/// builds a new table which replaces the previous one as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
    fetched_at: DateTime<Utc>,
}

impl PriceTable {
    /// Build a table from a currency -> price map, dropping non-finite prices
    pub fn new(prices: HashMap<String, f64>) -> Self {
        Self {
            prices: prices.into_iter().filter(|(_, price)| price.is_finite()).collect(),
            fetched_at: Utc::now(),
        }
    }

    /// Empty table, every lookup misses
    pub fn empty() -> Self {
        Self::new(HashMap::new())
    }

    /// Build a table from quotes. The document may list a currency more than
    /// once, the first quote for a currency wins.
    pub fn from_quotes<I>(quotes: I) -> Self
    where
        I: IntoIterator<Item = CurrencyPrice>,
    {
        let mut prices = HashMap::new();
        for quote in quotes {
            if !quote.price.is_finite() {
                continue;
            }
            prices.entry(quote.currency).or_insert(quote.price);
        }
        Self::new(prices)
    }

    /// Unit price of a currency, if known
    pub fn price_of(&self, currency: &str) -> Option<f64> {
        self.prices.get(currency).copied()
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.prices.contains_key(currency)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Same prices regardless of when they were fetched
    pub fn same_prices(&self, other: &PriceTable) -> bool {
        self.prices == other.prices
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<(String, f64)> for PriceTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
