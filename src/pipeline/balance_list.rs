//! Filter, sort and valuation of wallet balances into display rows.
//!
//! Every function here is pure: the rows depend only on the balances and
//! the price table passed in.

use crate::models::{Chain, DisplayRow, PriceTable, WalletBalance, UNSUPPORTED_PRIORITY};
use crate::utils::format_whole_amount;

/// Display priority of a chain
pub fn priority(chain: &Chain) -> i32 {
    chain.priority()
}

/// A balance is shown iff its chain is supported and it holds a positive amount
pub fn is_displayable(balance: &WalletBalance) -> bool {
    priority(&balance.chain) > UNSUPPORTED_PRIORITY && balance.amount > 0.0
}

/// Sort by descending priority. The sort is stable so equal priorities
/// keep their input order.
pub fn sort_by_priority(balances: &mut [&WalletBalance]) {
    balances.sort_by(|lhs, rhs| priority(&rhs.chain).cmp(&priority(&lhs.chain)));
}

/// Derive the display row of a single balance
pub fn derive_row(balance: &WalletBalance, prices: &PriceTable) -> DisplayRow {
    let (usd_value, price_known) = match prices.price_of(&balance.currency) {
        Some(price) => {
            let value = price * balance.amount;
            if value.is_finite() {
                (value, true)
            } else {
                (0.0, false)
            }
        }
        None => (0.0, false),
    };

    DisplayRow {
        key: balance.key(),
        currency: balance.currency.clone(),
        chain: balance.chain.clone(),
        amount: balance.amount,
        formatted_amount: format_whole_amount(balance.amount),
        usd_value,
        price_known,
    }
}

/// Run the whole pipeline: filter, sort, then derive one row per balance
pub fn build_rows(balances: &[WalletBalance], prices: &PriceTable) -> Vec<DisplayRow> {
    let mut kept: Vec<&WalletBalance> = balances.iter().filter(|b| is_displayable(b)).collect();
    sort_by_priority(&mut kept);
    kept.into_iter().map(|balance| derive_row(balance, prices)).collect()
}
