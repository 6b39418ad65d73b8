/// Render an amount as a whole number, rounding half away from zero.
///
/// No grouping separators and no decimals: `2.5` gives `"3"`, `1234.4`
/// gives `"1234"`. Non-finite amounts render as `"0"`.
pub fn format_whole_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let rounded = amount.round();
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}

/// Format a USD value with cents
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amount_rounds_half_away_from_zero() {
        assert_eq!(format_whole_amount(2.5), "3");
        assert_eq!(format_whole_amount(1234.4), "1234");
        assert_eq!(format_whole_amount(0.2), "0");
        assert_eq!(format_whole_amount(-0.2), "0");
        assert_eq!(format_whole_amount(f64::NAN), "0");
    }

    #[test]
    fn usd_has_two_decimals() {
        assert_eq!(format_usd(12.5), "$12.50");
        assert_eq!(format_usd(0.0), "$0.00");
    }
}
