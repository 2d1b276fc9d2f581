//! Date standardization to DD/MM/YYYY.

use regex::Regex;

use super::patterns::{DATE_DASHED, DATE_DOTTED, DATE_ISO, DATE_SLASHED};
use crate::models::record::NOT_AVAILABLE;

/// Recognized layouts in the order they are tried.
fn layouts() -> [(&'static Regex, bool); 4] {
    [
        (&*DATE_DOTTED, false),
        (&*DATE_SLASHED, false),
        (&*DATE_DASHED, false),
        (&*DATE_ISO, true),
    ]
}

/// Rewrite a date string as DD/MM/YYYY.
///
/// Tries DD.MM.YYYY, DD/MM/YYYY, DD-MM-YYYY and YYYY-MM-DD in that order and
/// formats the first match. Unrecognized input comes back unchanged; empty
/// input and `"N/A"` come back as `"N/A"`. No calendar check is made.
pub fn standardize_date(date: &str) -> String {
    if date.is_empty() || date == NOT_AVAILABLE {
        return NOT_AVAILABLE.to_string();
    }

    for (pattern, year_first) in layouts() {
        if let Some(caps) = pattern.captures(date) {
            return if year_first {
                format!("{}/{}/{}", &caps[3], &caps[2], &caps[1])
            } else {
                format!("{}/{}/{}", &caps[1], &caps[2], &caps[3])
            };
        }
    }

    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardize_each_layout() {
        assert_eq!(standardize_date("01.02.2023"), "01/02/2023");
        assert_eq!(standardize_date("01/02/2023"), "01/02/2023");
        assert_eq!(standardize_date("01-02-2023"), "01/02/2023");
        assert_eq!(standardize_date("2023-02-01"), "01/02/2023");
    }

    #[test]
    fn test_standardize_is_idempotent() {
        for input in ["15.08.2024", "15/08/2024", "15-08-2024", "2024-08-15"] {
            let once = standardize_date(input);
            assert_eq!(standardize_date(&once), once);
        }
    }

    #[test]
    fn test_standardize_passthrough() {
        assert_eq!(standardize_date("N/A"), "N/A");
        assert_eq!(standardize_date(""), "N/A");
        assert_eq!(standardize_date("1.2.23"), "1.2.23");
        assert_eq!(standardize_date("2023"), "2023");
    }

    #[test]
    fn test_standardize_searches_inside_text() {
        assert_eq!(standardize_date("dated 2023-12-31."), "31/12/2023");
    }
}
