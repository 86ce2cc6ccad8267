//! PDF text extraction module.

mod engines;
mod extractor;

pub use engines::{LopdfBackend, PdfExtractBackend};
pub use extractor::PdfExtractor;

use lopdf::encryption::DecryptionError;
use lopdf::Document;
use tracing::debug;

use crate::error::PdfError;
use crate::models::config::TextEngine;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text extraction engines.
pub trait TextBackend: Send + Sync {
    /// Short engine name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Extract the full text of a PDF, decrypting with `password` if needed.
    fn extract_text(&self, data: &[u8], password: &str) -> Result<String>;
}

/// Create the backend for a configured engine.
pub fn backend_for(engine: TextEngine) -> Box<dyn TextBackend> {
    match engine {
        TextEngine::PdfExtract => Box::new(PdfExtractBackend),
        TextEngine::Lopdf => Box::new(LopdfBackend),
    }
}

/// Load a PDF with lopdf, decrypting it when encrypted.
///
/// Returns the document and whether it had to be decrypted.
pub(crate) fn load_document(data: &[u8], password: &str) -> Result<(Document, bool)> {
    let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

    let encrypted = doc.is_encrypted();
    if encrypted {
        match doc.decrypt(password) {
            Ok(()) => {}
            Err(lopdf::Error::Decryption(DecryptionError::IncorrectPassword)) => {
                return Err(if password.is_empty() {
                    PdfError::PasswordRequired
                } else {
                    PdfError::InvalidPassword
                });
            }
            // unsupported schemes and broken /Encrypt dictionaries are not password problems
            Err(e) => return Err(PdfError::Parse(format!("unsupported encryption: {}", e))),
        }
        debug!("Decrypted PDF (password supplied: {})", !password.is_empty());
    }

    if doc.get_pages().is_empty() {
        return Err(PdfError::NoPages);
    }

    Ok((doc, encrypted))
}
