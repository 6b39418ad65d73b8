use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::WalletBalance;
use crate::traits::balance_source::BalanceSource;

/// Balances read from a JSON file on every fetch
pub struct FileBalanceSource {
    path: PathBuf,
}

impl FileBalanceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BalanceSource for FileBalanceSource {
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read balances from {}", self.path.display()))?;
        let balances: Vec<WalletBalance> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid balances file {}", self.path.display()))?;
        debug!("Loaded {} balances from {}", balances.len(), self.path.display());
        Ok(balances)
    }
}

/// In-memory balances, replaced wholesale
#[derive(Clone, Default)]
pub struct StaticBalanceSource {
    balances: Arc<RwLock<Vec<WalletBalance>>>,
}

impl StaticBalanceSource {
    pub fn new(balances: Vec<WalletBalance>) -> Self {
        Self {
            balances: Arc::new(RwLock::new(balances)),
        }
    }

    pub async fn replace(&self, balances: Vec<WalletBalance>) {
        *self.balances.write().await = balances;
    }
}

#[async_trait]
impl BalanceSource for StaticBalanceSource {
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>> {
        Ok(self.balances.read().await.clone())
    }
}
