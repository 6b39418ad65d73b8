//! Wallet page driver

pub mod wallet_page;

pub use wallet_page::WalletPage;
