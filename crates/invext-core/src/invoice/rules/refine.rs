//! Post-processors applied to raw pattern captures.
//!
//! Each has the [`Refine`](super::Refine) signature; returning `None`
//! rejects the capture and lets the next candidate pattern run.

use super::amounts::clean_currency;
use super::dates::standardize_date;
use super::patterns::SELLER_FOOTNOTE;
use super::text::{collapse_whitespace, truncate_chars};
use crate::models::config::ExtractionConfig;
use crate::models::record::ZERO_AMOUNT;

pub fn trimmed(raw: &str, _config: &ExtractionConfig) -> Option<String> {
    Some(raw.trim().to_string())
}

pub fn verbatim(raw: &str, _config: &ExtractionConfig) -> Option<String> {
    Some(raw.to_string())
}

pub fn currency(raw: &str, _config: &ExtractionConfig) -> Option<String> {
    Some(clean_currency(raw))
}

/// Like [`currency`], but a literal `0.00` capture does not count as a match.
pub fn nonzero_currency(raw: &str, _config: &ExtractionConfig) -> Option<String> {
    if raw == ZERO_AMOUNT {
        None
    } else {
        Some(clean_currency(raw))
    }
}

pub fn date(raw: &str, _config: &ExtractionConfig) -> Option<String> {
    Some(standardize_date(raw.trim()))
}

pub fn percent(raw: &str, _config: &ExtractionConfig) -> Option<String> {
    Some(format!("{}%", raw))
}

/// Amazon seller names carry a `*` footnote marker after the name.
pub fn amazon_seller(raw: &str, config: &ExtractionConfig) -> Option<String> {
    let name = SELLER_FOOTNOTE.replace(raw.trim(), "");
    Some(truncate_chars(name.trim(), config.seller_name_max_chars))
}

pub fn flipkart_seller(raw: &str, config: &ExtractionConfig) -> Option<String> {
    Some(truncate_chars(raw.trim(), config.seller_name_max_chars))
}

/// Single-spaced, trimmed and cut to `address_max_chars`.
pub fn address(raw: &str, config: &ExtractionConfig) -> Option<String> {
    let cut = truncate_chars(&collapse_whitespace(raw), config.address_max_chars);
    Some(cut.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_single_spaced_and_bounded() {
        let config = ExtractionConfig::default();
        let raw = format!("  Flat 2,  Lake View\n  Road {} ", "x".repeat(300));
        let cleaned = address(&raw, &config).unwrap();

        assert!(cleaned.starts_with("Flat 2, Lake View Road x"));
        assert!(!cleaned.contains("  "));
        assert_eq!(cleaned.chars().count(), 150);
    }

    #[test]
    fn test_nonzero_currency_rejects_literal_zero() {
        let config = ExtractionConfig::default();
        assert_eq!(nonzero_currency("0.00", &config), None);
        assert_eq!(nonzero_currency("0", &config), Some("0".to_string()));
        assert_eq!(nonzero_currency("1,040.00", &config), Some("1040.00".to_string()));
    }

    #[test]
    fn test_amazon_seller_drops_footnote() {
        let config = ExtractionConfig::default();
        assert_eq!(
            amazon_seller(" Appario Retail Private Ltd *Registered", &config),
            Some("Appario Retail Private Ltd".to_string())
        );
    }
}
