//! Invoice field extraction module.

mod batch;
mod parser;
pub mod rules;
mod vendor;

pub use batch::{BatchReport, FailedDocument};
pub use parser::{ExtractionResult, InvoiceParser, RuleInvoiceParser};
pub use vendor::{detect_vendor, Vendor};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
