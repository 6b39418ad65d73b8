//! Small formatting helpers

pub mod helper;

pub use helper::{format_usd, format_whole_amount};
