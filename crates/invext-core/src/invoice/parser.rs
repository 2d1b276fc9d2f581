//! Rule-based invoice parser.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::{Field, InvoiceRecord};
use crate::pdf::read_document_text;

use super::rules::normalize_text;
use super::vendor::{detect_vendor, Vendor};
use super::Result;

/// Result of invoice extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Complete record, defaults in place of unmatched fields.
    pub record: InvoiceRecord,
    /// Detected vendor.
    pub vendor: Vendor,
    /// Fields filled by a rule, in rule order.
    pub matched_fields: Vec<Field>,
    /// Extractable fields left at their default.
    pub unmatched_fields: Vec<Field>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse one document's raw text. `file_name` feeds vendor detection and
    /// the File Name column.
    fn parse(&self, text: &str, file_name: &str) -> Result<ExtractionResult>;
}

/// Parser driven by the per-vendor rule tables.
#[derive(Debug, Clone, Default)]
pub struct RuleInvoiceParser {
    config: ExtractionConfig,
}

impl RuleInvoiceParser {
    /// Create a parser with default extraction limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Build the record for already-normalized text using `vendor`'s rules.
    ///
    /// Never fails: every field without a match keeps its default.
    pub fn assemble(&self, text: &str, file_name: &str, vendor: Vendor) -> (InvoiceRecord, Vec<Field>) {
        let mut record = InvoiceRecord::new(file_name, vendor.source_label());
        let matched = vendor.rule_set().apply(text, &self.config, &mut record);
        (record, matched)
    }

    /// Acquire a document's text from disk and parse it.
    pub fn parse_file(&self, path: &Path) -> crate::Result<ExtractionResult> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let text = read_document_text(path)?;
        Ok(self.parse(&text, &file_name)?)
    }
}

impl InvoiceParser for RuleInvoiceParser {
    fn parse(&self, text: &str, file_name: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return Err(ExtractionError::NoText(file_name.to_string()));
        }

        let vendor = detect_vendor(&normalized, file_name);
        info!("Parsing {} as {} invoice ({} chars)", file_name, vendor, normalized.len());

        let (record, matched_fields) = self.assemble(&normalized, file_name, vendor);
        let unmatched_fields: Vec<Field> = vendor
            .rule_set()
            .rules()
            .iter()
            .map(|rule| rule.field())
            .filter(|field| !matched_fields.contains(field))
            .collect();

        debug!(
            "Extracted {}/{} fields from {}",
            matched_fields.len(),
            matched_fields.len() + unmatched_fields.len(),
            file_name
        );

        Ok(ExtractionResult {
            record,
            vendor,
            matched_fields,
            unmatched_fields,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_whitespace_only_text_is_rejected() {
        let parser = RuleInvoiceParser::new();
        let err = parser.parse(" \r\n\t ", "blank.pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::NoText(ref name) if name == "blank.pdf"));
    }

    #[test]
    fn test_unknown_vendor_falls_back() {
        let parser = RuleInvoiceParser::new();
        let result = parser.parse("Order Number: 111-2222222-3333333", "scan_01.pdf").unwrap();

        assert_eq!(result.vendor, Vendor::Unknown);
        assert_eq!(result.record.get(Field::InvoiceSource), "Unknown");
        assert_eq!(result.record.get(Field::FileName), "scan_01.pdf");
        assert_eq!(result.record.get(Field::OrderNumber), "111-2222222-3333333");
    }

    #[test]
    fn test_matched_and_unmatched_partition_rules() {
        let parser = RuleInvoiceParser::new();
        let result = parser.parse("Flipkart Qty 3", "invoice.pdf").unwrap();

        assert_eq!(result.vendor, Vendor::Flipkart);
        assert_eq!(result.matched_fields, vec![Field::Quantity]);
        assert_eq!(
            result.matched_fields.len() + result.unmatched_fields.len(),
            Vendor::Flipkart.rule_set().rules().len()
        );
        assert!(result.unmatched_fields.contains(&Field::GrandTotal));
    }

    #[test]
    fn test_custom_limits_apply() {
        let parser = RuleInvoiceParser::with_config(ExtractionConfig {
            address_max_chars: 10,
            ..ExtractionConfig::default()
        });
        let result = parser
            .parse("amazon Billing Address: 221B Baker Street London", "a.pdf")
            .unwrap();
        assert_eq!(result.record.get(Field::BillingAddress), "221B Baker");
    }
}
