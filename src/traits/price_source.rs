use async_trait::async_trait;

use crate::models::PriceTable;

/// Trait for price feeds
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch a complete snapshot of current unit USD prices
    async fn fetch_prices(&self) -> anyhow::Result<PriceTable>;
}
