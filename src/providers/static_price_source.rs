use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::models::PriceTable;
use crate::traits::price_source::PriceSource;

/// In-memory price source
///
/// Prices can be changed while the tracker runs. Each fetch copies the
/// current state into a fresh snapshot.
#[derive(Clone, Default)]
pub struct StaticPriceSource {
    prices: Arc<DashMap<String, f64>>,
}

impl StaticPriceSource {
    /// Create an empty static price source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source seeded with prices
    pub fn with_prices<I, S>(prices: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let source = Self::new();
        for (currency, price) in prices {
            source.set_price(currency, price);
        }
        source
    }

    pub fn set_price(&self, currency: impl Into<String>, price: f64) {
        self.prices.insert(currency.into(), price);
    }

    pub fn remove_price(&self, currency: &str) -> Option<f64> {
        self.prices.remove(currency).map(|(_, price)| price)
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn fetch_prices(&self) -> anyhow::Result<PriceTable> {
        let table: PriceTable = self
            .prices
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        debug!("Static price snapshot with {} prices", table.len());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_returns_current_prices() {
        let source = StaticPriceSource::with_prices([("ATOM", 7.0), ("ETH", 1600.0)]);
        source.set_price("ATOM", 7.5);
        assert_eq!(source.remove_price("ETH"), Some(1600.0));

        let table = source.fetch_prices().await.unwrap();
        assert_eq!(table.price_of("ATOM"), Some(7.5));
        assert!(!table.contains("ETH"));
    }
}
