use std::io::{self, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

pub fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes_read = io::stdin().read_line(&mut input)?;
    if bytes_read == 0 {
        anyhow::bail!("standard input closed");
    }
    Ok(input.trim().to_string())
}

/// Amounts must parse as a decimal number and be positive.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let amount = Decimal::from_str(input.trim()).ok()?;
    (amount > Decimal::ZERO).then_some(amount)
}

pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

pub fn format_rate(rate: Decimal) -> String {
    format!("{:.4}", rate.round_dp(4))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn amounts_parse_as_decimals() {
        assert_eq!(parse_amount("10"), Some(dec!(10)));
        assert_eq!(parse_amount("10.50"), Some(dec!(10.50)));
        assert_eq!(parse_amount(" 0.01 "), Some(dec!(0.01)));
    }

    #[test]
    fn non_numeric_amounts_are_rejected() {
        assert_eq!(parse_amount("ten"), None);
        assert_eq!(parse_amount("10,5"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-3.2"), None);
    }

    #[test]
    fn converting_ten_usd_at_ninety_cents_yields_nine_euros() {
        let converted = dec!(10) * dec!(0.90);
        assert_eq!(converted, dec!(9.00));
        assert_eq!(format_amount(converted), "9.00");
    }

    #[test]
    fn display_precision_is_fixed() {
        assert_eq!(format_amount(dec!(1234.5)), "1234.50");
        assert_eq!(format_amount(dec!(0.006)), "0.01");
        assert_eq!(format_rate(dec!(151.2)), "151.2000");
        assert_eq!(format_rate(dec!(0.76512345)), "0.7651");
    }
}
