//! Balance and price sources

pub mod balance_source;
pub mod http_price_source;
pub mod static_price_source;

// Re-export for convenience
pub use balance_source::{FileBalanceSource, StaticBalanceSource};
pub use http_price_source::{parse_prices, HttpPriceSource, DEFAULT_PRICES_URL};
pub use static_price_source::StaticPriceSource;
