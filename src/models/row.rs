use serde::Serialize;

use super::balance::BalanceKey;
use super::chain::Chain;

/// One rendered line of the wallet page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub key: BalanceKey,
    pub currency: String,
    pub chain: Chain,
    pub amount: f64,
    pub formatted_amount: String,
    pub usd_value: f64,
    /// False when the price table had no usable price for the currency
    pub price_known: bool,
}

impl DisplayRow {
    pub fn priority(&self) -> i32 {
        self.chain.priority()
    }
}

/// Sum of the USD value over rows
pub fn total_usd_value(rows: &[DisplayRow]) -> f64 {
    rows.iter().map(|row| row.usd_value).sum()
}
