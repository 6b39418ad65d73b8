use std::fmt;

use serde::{Deserialize, Serialize};

use super::chain::Chain;

/// A wallet balance as reported by a balance source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    #[serde(rename = "blockchain", alias = "chain")]
    pub chain: Chain,
}

impl WalletBalance {
    /// Create a new wallet balance
    pub fn new(currency: impl Into<String>, amount: f64, chain: Chain) -> Self {
        Self {
            currency: currency.into(),
            amount,
            chain,
        }
    }

    /// Stable identity of this balance, independent of list position
    pub fn key(&self) -> BalanceKey {
        BalanceKey {
            currency: self.currency.clone(),
            chain: self.chain.clone(),
        }
    }

    pub fn priority(&self) -> i32 {
        self.chain.priority()
    }
}

/// Identity of a balance: `currency|chain`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BalanceKey {
    pub currency: String,
    pub chain: Chain,
}

impl fmt::Display for BalanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.currency, self.chain)
    }
}

impl Serialize for BalanceKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
