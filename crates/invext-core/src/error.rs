//! Error types for the invext-core library.

use thiserror::Error;

/// Main error type for the invext library.
#[derive(Error, Debug)]
pub enum InvextError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Invoice extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Document-level extraction failures.
///
/// Field rules never fail; a document is only rejected as a whole.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Nothing left after whitespace normalization.
    #[error("no text extracted from {0}")]
    NoText(String),

    /// The input is neither a PDF nor a plain-text dump.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for the invext library.
pub type Result<T> = std::result::Result<T, InvextError>;
