//! Text extraction engines backed by pdf-extract and lopdf.

use std::panic;

use tracing::{debug, trace};

use super::{load_document, Result, TextBackend};
use crate::error::PdfError;

/// Whole-document extraction with the `pdf-extract` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractBackend;

impl TextBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_text(&self, data: &[u8], password: &str) -> Result<String> {
        let (mut doc, encrypted) = load_document(data, password)?;

        // pdf-extract reads raw bytes, so hand it the decrypted document
        let decrypted;
        let bytes = if encrypted {
            let mut buffer = Vec::new();
            doc.save_to(&mut buffer)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted = buffer;
            decrypted.as_slice()
        } else {
            data
        };

        let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| PdfError::TextExtraction("pdf-extract panicked".to_string()))?
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        debug!("pdf-extract produced {} chars", text.len());
        Ok(text)
    }
}

/// Page-by-page extraction with `lopdf`, pages separated by a blank line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl TextBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_text(&self, data: &[u8], password: &str) -> Result<String> {
        let (doc, _) = load_document(data, password)?;

        let mut pages = Vec::new();
        for page_num in doc.get_pages().keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(text) => {
                    trace!("lopdf page {}: {} chars", page_num, text.len());
                    pages.push(text);
                }
                // image-only pages have nothing to give
                Err(e) => {
                    trace!("lopdf page {} yielded no text: {}", page_num, e);
                    pages.push(String::new());
                }
            }
        }

        debug!("lopdf extracted {} pages", pages.len());
        Ok(pages.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engines_report_parse_errors() {
        let garbage = b"not a pdf at all";

        assert!(matches!(
            PdfExtractBackend.extract_text(garbage, ""),
            Err(PdfError::Parse(_))
        ));
        assert!(matches!(
            LopdfBackend.extract_text(garbage, ""),
            Err(PdfError::Parse(_))
        ));
    }
}
