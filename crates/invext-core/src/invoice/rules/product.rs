//! Product name reconstruction.

use super::patterns::{
    ITEM_PRICE_ARTIFACT, ITEM_ROW_START, ITEM_SECTION_BREAK, PRODUCT_LEADING_INDEX,
    PRODUCT_TRAILING_FIGURES,
};
use super::text::truncate_chars;
use crate::models::config::ExtractionConfig;

/// Words that mark a totals/tax line rather than a wrapped product name.
const AGGREGATE_KEYWORDS: [&str; 4] = ["total", "amount", "tax", "gst"];

/// Shortest Flipkart product candidate accepted as a real name.
const MIN_FLIPKART_PRODUCT_CHARS: usize = 10;

fn ends_product_name(line: &str) -> bool {
    if line.is_empty() || ITEM_SECTION_BREAK.is_match(line) {
        return true;
    }
    let lower = line.to_lowercase();
    AGGREGATE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Rebuild the first line item's name from an Amazon item table.
///
/// The row starts with the item index `1`; the name may wrap onto up to
/// `product_lookahead_lines` following lines. A continuation stops at the
/// first empty line, table section header, or totals/tax line.
pub fn amazon_product_name(text: &str, config: &ExtractionConfig) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = lines.iter().position(|line| ITEM_ROW_START.is_match(line))?;

    let mut parts = vec![ITEM_ROW_START.replace(lines[start], "").into_owned()];
    for line in lines
        .iter()
        .skip(start + 1)
        .take(config.product_lookahead_lines)
    {
        let line = line.trim();
        if ends_product_name(line) {
            break;
        }
        parts.push(line.to_string());
    }

    let joined = parts.join(" ");
    let name = ITEM_PRICE_ARTIFACT.replace(&joined, "");
    Some(truncate_chars(name.trim(), config.product_name_max_chars))
}

/// Clean a Flipkart product name candidate.
///
/// Trailing quantity/price figures and a leading row index are removed;
/// anything of ten characters or fewer is rejected so the next candidate
/// pattern gets a chance.
pub fn flipkart_product_name(raw: &str, config: &ExtractionConfig) -> Option<String> {
    let without_figures = PRODUCT_TRAILING_FIGURES.replace(raw.trim(), "");
    let name = PRODUCT_LEADING_INDEX.replace(&without_figures, "");
    let name = name.trim();

    if name.chars().count() > MIN_FLIPKART_PRODUCT_CHARS {
        Some(truncate_chars(name, config.product_name_max_chars))
    } else {
        None
    }
}
