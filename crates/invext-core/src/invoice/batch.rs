//! Accumulation of per-document outcomes across a batch run.

use serde::Serialize;
use tracing::debug;

use super::parser::ExtractionResult;
use crate::models::record::InvoiceRecord;

/// A document that produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDocument {
    pub file_name: String,
    pub reason: String,
}

/// Records and failures collected in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    records: Vec<InvoiceRecord>,
    failed: Vec<FailedDocument>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one document's outcome. A failure is kept by name.
    pub fn push(&mut self, file_name: &str, outcome: crate::Result<ExtractionResult>) {
        match outcome {
            Ok(result) => self.records.push(result.record),
            Err(e) => {
                debug!("Skipping {}: {}", file_name, e);
                self.failed.push(FailedDocument {
                    file_name: file_name.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    pub fn records(&self) -> &[InvoiceRecord] {
        &self.records
    }

    pub fn failed(&self) -> &[FailedDocument] {
        &self.failed
    }

    /// Number of documents that produced a record.
    pub fn processed(&self) -> usize {
        self.records.len()
    }

    pub fn total(&self) -> usize {
        self.records.len() + self.failed.len()
    }
}
