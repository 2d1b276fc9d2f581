//! Core library for e-commerce invoice field extraction.
//!
//! This crate provides:
//! - PDF text acquisition (lopdf + pdf-extract)
//! - Text normalization and value cleaners (currency, dates)
//! - Vendor detection (Amazon, Flipkart, unknown)
//! - Per-vendor rule tables that fill a fixed 21-column invoice record
//! - A batch accumulator that keeps records and failed documents apart

pub mod error;
pub mod models;
pub mod pdf;
pub mod invoice;

pub use error::{ExtractionError, InvextError, PdfError, Result};
pub use models::config::InvextConfig;
pub use models::record::{Field, InvoiceRecord};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use invoice::{
    detect_vendor, BatchReport, ExtractionResult, FailedDocument, InvoiceParser, RuleInvoiceParser,
    Vendor,
};
