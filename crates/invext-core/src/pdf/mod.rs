//! Document text acquisition.

mod extractor;

pub use extractor::PdfExtractor;

use std::path::Path;

use tracing::debug;

use crate::error::{ExtractionError, InvextError, PdfError};

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from every page as one string.
    fn extract_text(&self) -> Result<String>;
}

/// Read the raw text of one invoice document.
///
/// PDFs go through [`PdfExtractor`]; `.txt` files are taken as an already
/// linearized text dump. The extractor is dropped before returning, so no
/// document stays open across calls.
pub fn read_document_text(path: &Path) -> crate::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => {
            let data = std::fs::read(path)?;
            let mut extractor = PdfExtractor::new();
            extractor.load(&data)?;
            debug!("{}: {} page(s)", path.display(), extractor.page_count());
            Ok(extractor.extract_text()?)
        }
        "txt" => Ok(std::fs::read_to_string(path)?),
        _ => Err(InvextError::Extraction(ExtractionError::UnsupportedFormat(
            extension,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_text_dump() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.TXT");
        std::fs::write(&path, "Order Number: 1").unwrap();

        assert_eq!(read_document_text(&path).unwrap(), "Order Number: 1");
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let result = read_document_text(Path::new("scan.png"));
        assert!(matches!(
            result,
            Err(InvextError::Extraction(ExtractionError::UnsupportedFormat(ext))) if ext == "png"
        ));
    }

    #[test]
    fn test_broken_pdf_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.4 truncated").unwrap();

        assert!(matches!(read_document_text(&path), Err(InvextError::Pdf(_))));
    }
}
