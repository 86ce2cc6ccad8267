//! Two-engine PDF text extraction with fallback.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::{backend_for, Result, TextBackend};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Extracts statement text, falling back to a second engine.
///
/// The primary engine is tried first. If it fails or returns only
/// whitespace, the secondary engine is tried. If both fail the error
/// carries both causes. A rejected password is returned immediately since
/// both engines share the same decryption step.
pub struct PdfExtractor {
    primary: Box<dyn TextBackend>,
    secondary: Box<dyn TextBackend>,
}

impl PdfExtractor {
    /// Create an extractor with pdf-extract first and lopdf as fallback.
    pub fn new() -> Self {
        Self::from_config(&PdfConfig::default())
    }

    /// Create an extractor with the configured engine order.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::with_backends(
            backend_for(config.primary_engine),
            backend_for(config.secondary_engine),
        )
    }

    /// Create an extractor from explicit engines.
    pub fn with_backends(primary: Box<dyn TextBackend>, secondary: Box<dyn TextBackend>) -> Self {
        Self { primary, secondary }
    }

    /// Read a PDF from disk and extract its text.
    pub fn extract_file(&self, path: &Path, password: &str) -> crate::Result<String> {
        let data = fs::read(path)?;
        debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(self.extract(&data, password)?)
    }

    /// Extract the full text of a PDF held in memory.
    pub fn extract(&self, data: &[u8], password: &str) -> Result<String> {
        let primary_err = match run_backend(self.primary.as_ref(), data, password) {
            Ok(text) => return Ok(text),
            Err(e) if e.is_authentication() => return Err(e),
            Err(PdfError::Empty) => {
                warn!(
                    "{} returned empty text; attempting {} fallback",
                    self.primary.name(),
                    self.secondary.name()
                );
                PdfError::Empty
            }
            Err(e) => {
                debug!("{} extraction failed: {}", self.primary.name(), e);
                e
            }
        };

        let secondary_err = match run_backend(self.secondary.as_ref(), data, password) {
            Ok(text) => return Ok(text),
            Err(e) if e.is_authentication() => return Err(e),
            Err(e) => {
                debug!("{} extraction failed: {}", self.secondary.name(), e);
                e
            }
        };

        Err(PdfError::ExtractionFailed {
            primary: format!("{}: {}", self.primary.name(), primary_err),
            secondary: format!("{}: {}", self.secondary.name(), secondary_err),
        })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn run_backend(backend: &dyn TextBackend, data: &[u8], password: &str) -> Result<String> {
    let text = backend.extract_text(data, password)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PdfError::Empty);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    enum Behavior {
        Text(&'static str),
        Fail(&'static str),
        WrongPassword,
    }

    struct FakeBackend {
        name: &'static str,
        behavior: Behavior,
        calls: Arc<AtomicUsize>,
    }

    impl FakeBackend {
        fn boxed(name: &'static str, behavior: Behavior) -> (Box<dyn TextBackend>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let backend = FakeBackend {
                name,
                behavior,
                calls: Arc::clone(&calls),
            };
            (Box::new(backend), calls)
        }
    }

    impl TextBackend for FakeBackend {
        fn name(&self) -> &'static str {
            self.name
        }

        fn extract_text(&self, _data: &[u8], _password: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Text(text) => Ok(text.to_string()),
                Behavior::Fail(msg) => Err(PdfError::TextExtraction(msg.to_string())),
                Behavior::WrongPassword => Err(PdfError::InvalidPassword),
            }
        }
    }

    #[test]
    fn test_primary_success_skips_secondary() {
        let (primary, _) = FakeBackend::boxed("first", Behavior::Text("  New Balance $10.00 \n"));
        let (secondary, secondary_calls) = FakeBackend::boxed("second", Behavior::Text("other"));
        let extractor = PdfExtractor::with_backends(primary, secondary);

        let text = extractor.extract(b"", "").unwrap();
        assert_eq!(text, "New Balance $10.00");
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_primary_falls_back() {
        let (primary, _) = FakeBackend::boxed("first", Behavior::Text(" \n\n "));
        let (secondary, secondary_calls) = FakeBackend::boxed("second", Behavior::Text("page one\n\npage two"));
        let extractor = PdfExtractor::with_backends(primary, secondary);

        let text = extractor.extract(b"", "").unwrap();
        assert_eq!(text, "page one\n\npage two");
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failing_primary_falls_back() {
        let (primary, _) = FakeBackend::boxed("first", Behavior::Fail("bad font"));
        let (secondary, _) = FakeBackend::boxed("second", Behavior::Text("statement"));
        let extractor = PdfExtractor::with_backends(primary, secondary);

        assert_eq!(extractor.extract(b"", "").unwrap(), "statement");
    }

    #[test]
    fn test_both_failing_reports_both_causes() {
        let (primary, _) = FakeBackend::boxed("first", Behavior::Fail("bad font"));
        let (secondary, _) = FakeBackend::boxed("second", Behavior::Text("   "));
        let extractor = PdfExtractor::with_backends(primary, secondary);

        match extractor.extract(b"", "") {
            Err(PdfError::ExtractionFailed { primary, secondary }) => {
                assert_eq!(primary, "first: failed to extract text: bad font");
                assert_eq!(secondary, "second: no text content extracted");
            }
            other => panic!("expected ExtractionFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_password_is_not_retried() {
        let (primary, _) = FakeBackend::boxed("first", Behavior::WrongPassword);
        let (secondary, secondary_calls) = FakeBackend::boxed("second", Behavior::Text("text"));
        let extractor = PdfExtractor::with_backends(primary, secondary);

        let err = extractor.extract(b"", "hunter2").unwrap_err();
        assert!(matches!(err, PdfError::InvalidPassword));
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_real_engines_on_garbage() {
        let extractor = PdfExtractor::new();
        let err = extractor.extract(b"this is not a pdf", "").unwrap_err();

        match err {
            PdfError::ExtractionFailed { primary, secondary } => {
                assert!(primary.starts_with("pdf-extract: failed to parse PDF"));
                assert!(secondary.starts_with("lopdf: failed to parse PDF"));
            }
            other => panic!("expected ExtractionFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfExtractor::new()
            .extract_file(&dir.path().join("missing.pdf"), "")
            .unwrap_err();
        assert!(matches!(err, crate::error::CardStmtError::Io(_)));
    }
}
