//! Data models for the wallet balance tracker

pub mod chain;
pub mod balance;
pub mod prices;
pub mod row;

// Re-export for convenience
pub use chain::{Chain, UNSUPPORTED_PRIORITY};
pub use balance::{BalanceKey, WalletBalance};
pub use prices::{CurrencyPrice, PriceTable};
pub use row::{total_usd_value, DisplayRow};
