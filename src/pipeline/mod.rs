//! Balance list pipeline

pub mod balance_list;
pub mod memo;

pub use balance_list::{build_rows, derive_row, is_displayable, priority, sort_by_priority};
pub use memo::MemoizedRows;
