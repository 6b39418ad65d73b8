//! Wallet Balance Tracker Library
//!
//! Turns wallet balances and a price snapshot into ordered display rows,
//! and keeps those rows current as the sources change.

// Public modules - these are the API surface
pub mod config;
pub mod models;
pub mod pipeline;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod tracker;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::Config;
pub use models::{
    BalanceKey, Chain, CurrencyPrice, DisplayRow, PriceTable, WalletBalance, UNSUPPORTED_PRIORITY,
};
pub use pipeline::{build_rows, MemoizedRows};
pub use traits::{BalanceSource, PriceSource, RowsEventHandler};
pub use providers::{FileBalanceSource, HttpPriceSource, StaticBalanceSource, StaticPriceSource};
pub use handlers::ConsoleRowsHandler;
pub use tracker::WalletPage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
