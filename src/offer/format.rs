use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as whole Rupiah with `.` thousands separators.
///
/// ```
/// use penawaran::offer::format_rupiah;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_rupiah(dec!(104895000)), "Rp. 104.895.000");
/// ```
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{sign}Rp. {}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn grouping() {
        assert_eq!(format_rupiah(dec!(0)), "Rp. 0");
        assert_eq!(format_rupiah(dec!(999)), "Rp. 999");
        assert_eq!(format_rupiah(dec!(1000)), "Rp. 1.000");
        assert_eq!(format_rupiah(dec!(200000)), "Rp. 200.000");
        assert_eq!(format_rupiah(dec!(1250000)), "Rp. 1.250.000");
    }

    #[test]
    fn rounds_to_whole_rupiah() {
        assert_eq!(format_rupiah(dec!(1499.5)), "Rp. 1.500");
        assert_eq!(format_rupiah(dec!(1499.49)), "Rp. 1.499");
        assert_eq!(format_rupiah(dec!(10395000.00)), "Rp. 10.395.000");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_rupiah(dec!(-50)), "-Rp. 50");
        assert_eq!(format_rupiah(dec!(-0.4)), "Rp. 0");
    }
}
