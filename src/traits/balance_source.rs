use async_trait::async_trait;

use crate::models::WalletBalance;

/// Source of the wallet's current balances
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch the current ordered list of balances
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>>;
}
