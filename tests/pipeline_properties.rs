//! Property-based tests for the balance list pipeline.

use proptest::prelude::*;
use std::collections::HashMap;
use wallet_balance_tracker::pipeline::{build_rows, priority};
use wallet_balance_tracker::{Chain, PriceTable, WalletBalance, UNSUPPORTED_PRIORITY};

// =============================================================================
// Generators
// =============================================================================

fn arb_chain() -> impl Strategy<Value = Chain> {
    prop_oneof![
        Just(Chain::Osmosis),
        Just(Chain::Ethereum),
        Just(Chain::Arbitrum),
        Just(Chain::Zilliqa),
        Just(Chain::Neo),
        "[A-Z][a-z]{2,8}".prop_map(|name| Chain::from(name.as_str())),
    ]
}

fn arb_balance() -> impl Strategy<Value = WalletBalance> {
    (
        prop_oneof![Just("ATOM"), Just("ETH"), Just("USDC"), Just("ZIL"), Just("NEO"), Just("OSMO")],
        prop_oneof![Just(0.0), -1000.0f64..1000.0],
        arb_chain(),
    )
        .prop_map(|(currency, amount, chain)| WalletBalance::new(currency, amount, chain))
}

fn arb_prices() -> impl Strategy<Value = PriceTable> {
    proptest::collection::hash_map(
        prop_oneof![Just("ATOM".to_string()), Just("ETH".to_string()), Just("USDC".to_string())],
        0.0f64..5000.0,
        0..3,
    )
    .prop_map(|prices: HashMap<String, f64>| PriceTable::new(prices))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A balance is shown iff its chain is supported and its amount is positive.
    #[test]
    fn prop_filter_keeps_exactly_displayable(
        balances in proptest::collection::vec(arb_balance(), 0..20),
        prices in arb_prices(),
    ) {
        let rows = build_rows(&balances, &prices);
        let expected = balances
            .iter()
            .filter(|b| priority(&b.chain) > UNSUPPORTED_PRIORITY && b.amount > 0.0)
            .count();
        prop_assert_eq!(rows.len(), expected);
        for row in &rows {
            prop_assert!(row.amount > 0.0);
            prop_assert!(row.chain.is_supported());
        }
    }

    /// Output is non-increasing in priority.
    #[test]
    fn prop_rows_sorted_by_descending_priority(
        balances in proptest::collection::vec(arb_balance(), 0..20),
    ) {
        let rows = build_rows(&balances, &PriceTable::empty());
        for pair in rows.windows(2) {
            prop_assert!(pair[0].priority() >= pair[1].priority());
        }
    }

    /// Running twice on the same inputs gives identical rows, keys included.
    #[test]
    fn prop_pipeline_is_deterministic(
        balances in proptest::collection::vec(arb_balance(), 0..20),
        prices in arb_prices(),
    ) {
        prop_assert_eq!(build_rows(&balances, &prices), build_rows(&balances, &prices));
    }

    /// USD values are always finite and fall back to zero without a price.
    #[test]
    fn prop_usd_value_never_nan(
        balances in proptest::collection::vec(arb_balance(), 0..20),
        prices in arb_prices(),
    ) {
        for row in build_rows(&balances, &prices) {
            prop_assert!(row.usd_value.is_finite());
            if !prices.contains(&row.currency) {
                prop_assert_eq!(row.usd_value, 0.0);
                prop_assert!(!row.price_known);
            }
        }
    }

    /// Changing only the prices leaves the keys and their order untouched.
    #[test]
    fn prop_keys_stable_across_price_changes(
        balances in proptest::collection::vec(arb_balance(), 0..20),
        before in arb_prices(),
        after in arb_prices(),
    ) {
        let keys = |prices: &PriceTable| -> Vec<String> {
            build_rows(&balances, prices).iter().map(|r| r.key.to_string()).collect()
        };
        prop_assert_eq!(keys(&before), keys(&after));
    }

    /// No balances, no rows.
    #[test]
    fn prop_empty_balances_give_empty_rows(prices in arb_prices()) {
        prop_assert!(build_rows(&[], &prices).is_empty());
    }
}

#[test]
fn documented_example_order() {
    let balances = vec![
        WalletBalance::new("NEO", 3.0, Chain::Neo),
        WalletBalance::new("ATOM", 5.0, Chain::Osmosis),
        WalletBalance::new("ETH", 1.0, Chain::Ethereum),
        WalletBalance::new("X", 0.0, Chain::Osmosis),
        WalletBalance::new("SOL", 9.0, Chain::from("Solana")),
    ];
    let rows = build_rows(&balances, &PriceTable::empty());
    let keys: Vec<String> = rows.iter().map(|r| r.key.to_string()).collect();
    assert_eq!(keys, vec!["ATOM|Osmosis", "ETH|Ethereum", "NEO|Neo"]);
}
