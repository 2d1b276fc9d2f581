//! Currency string cleanup.

use crate::models::record::ZERO_AMOUNT;

/// Reduce a currency string to its digits and decimal point.
///
/// Everything but digits, commas and periods is dropped, commas are treated
/// as thousands separators and removed. Returns `"0.00"` if nothing is left.
///
/// When more than one period survives only the last one is kept, so
/// `"Rs. 1,234.50"` gives `"1234.50"` and `"1.2.3"` gives `"12.3"`. A lone
/// prefix period is not told apart from a decimal point: `"Rs. 5"` gives `".5"`.
pub fn clean_currency(amount: &str) -> String {
    let kept: String = amount
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if kept.is_empty() {
        return ZERO_AMOUNT.to_string();
    }

    match kept.rfind('.') {
        Some(pos) => {
            let (integer_part, fraction) = kept.split_at(pos);
            format!("{}{}", integer_part.replace('.', ""), fraction)
        }
        None => kept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean_currency_glyph_and_separators() {
        assert_eq!(clean_currency("₹1,234.56"), "1234.56");
        assert_eq!(clean_currency("₹ 12,34,567.00"), "1234567.00");
        assert_eq!(clean_currency("199"), "199");
    }

    #[test]
    fn test_clean_currency_defaults() {
        assert_eq!(clean_currency(""), "0.00");
        assert_eq!(clean_currency("N/A"), "0.00");
    }

    #[test]
    fn test_clean_currency_returns_any_nonempty_remainder() {
        assert_eq!(clean_currency("."), ".");
        assert_eq!(clean_currency("Rs. 5"), ".5");
    }

    #[test]
    fn test_clean_currency_keeps_last_period() {
        assert_eq!(clean_currency("Rs. 1,234.50"), "1234.50");
        assert_eq!(clean_currency("1.2.3"), "12.3");
    }

    proptest! {
        #[test]
        fn prop_clean_currency_is_numeric(input in ".*") {
            let cleaned = clean_currency(&input);
            let digits_and_one_point = cleaned.chars().filter(|c| *c == '.').count() <= 1
                && cleaned.chars().all(|c| c.is_ascii_digit() || c == '.');
            prop_assert!(digits_and_one_point, "{:?} -> {:?}", input, cleaned);
        }
    }
}
