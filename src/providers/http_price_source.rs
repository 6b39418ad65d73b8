use std::collections::HashMap;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::{CurrencyPrice, PriceTable};
use crate::traits::price_source::PriceSource;

/// Public prices document
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

/// Accepted shapes of a prices payload
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PricesPayload {
    Quotes(Vec<CurrencyPrice>),
    Table(HashMap<String, f64>),
}

/// Parse a prices document into a table
///
/// The body is either a list of `{currency, date, price}` quotes or a flat
/// `{currency: price}` object.
pub fn parse_prices(body: &str) -> anyhow::Result<PriceTable> {
    let payload: PricesPayload =
        serde_json::from_str(body).context("Prices payload is neither a quote list nor a price map")?;

    Ok(match payload {
        PricesPayload::Quotes(quotes) => PriceTable::from_quotes(quotes),
        PricesPayload::Table(prices) => PriceTable::new(prices),
    })
}

/// Price source backed by an HTTP endpoint
pub struct HttpPriceSource {
    client: Client,
    url: String,
}

impl HttpPriceSource {
    /// Create a new HTTP price source
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpPriceSource {
    fn default() -> Self {
        Self::new(DEFAULT_PRICES_URL)
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch_prices(&self) -> anyhow::Result<PriceTable> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to reach price feed {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Price feed {} answered {}", self.url, status);
            anyhow::bail!(
                "Failed to fetch prices: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            );
        }

        let body = response
            .text()
            .await
            .context("Failed to read price feed body")?;
        let table = parse_prices(&body)?;
        debug!("Fetched {} prices from {}", table.len(), self.url);
        Ok(table)
    }
}
