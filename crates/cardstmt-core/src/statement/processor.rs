//! Per-document pipeline: read, extract text, parse.

use std::path::Path;

use tracing::info;

use super::StatementParser;
use crate::models::config::StatementConfig;
use crate::models::record::ResultRecord;
use crate::pdf::PdfExtractor;
use crate::Result;

/// Turns one statement file into a [`ResultRecord`].
pub struct StatementProcessor {
    extractor: PdfExtractor,
    parser: StatementParser,
}

impl StatementProcessor {
    pub fn new(extractor: PdfExtractor, parser: StatementParser) -> Self {
        Self { extractor, parser }
    }

    pub fn from_config(config: &StatementConfig) -> Self {
        Self::new(
            PdfExtractor::from_config(&config.pdf),
            StatementParser::from_config(&config.classifier),
        )
    }

    pub fn parser(&self) -> &StatementParser {
        &self.parser
    }

    /// Process a single statement.
    ///
    /// Extraction failures are returned to the caller unchanged; converting
    /// them into error records is left to the batch driver.
    pub fn process(&self, path: &Path, password: &str) -> Result<ResultRecord> {
        info!("Processing {}", path.display());

        let text = self.extractor.extract_file(path, password)?;
        let parsed = self.parser.identify_and_parse(&text);

        Ok(ResultRecord::new(parsed.bank, parsed.fields, path.display().to_string()))
    }
}

impl Default for StatementProcessor {
    fn default() -> Self {
        Self::new(PdfExtractor::default(), StatementParser::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CardStmtError, PdfError};
    use crate::models::record::{BankId, FieldRecord};
    use crate::pdf::TextBackend;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    struct CannedText(&'static str);

    impl TextBackend for CannedText {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn extract_text(&self, _data: &[u8], _password: &str) -> crate::pdf::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Rejecting;

    impl TextBackend for Rejecting {
        fn name(&self) -> &'static str {
            "rejecting"
        }

        fn extract_text(&self, _data: &[u8], password: &str) -> crate::pdf::Result<String> {
            Err(if password.is_empty() {
                PdfError::PasswordRequired
            } else {
                PdfError::InvalidPassword
            })
        }
    }

    fn processor(primary: Box<dyn TextBackend>, secondary: Box<dyn TextBackend>) -> StatementProcessor {
        StatementProcessor::new(
            PdfExtractor::with_backends(primary, secondary),
            StatementParser::default(),
        )
    }

    fn write_file(dir: &TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"%PDF-1.4 placeholder").unwrap();
        path
    }

    #[test]
    fn test_process_attaches_bank_and_source() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "stmt.pdf");
        let processor = processor(
            Box::new(CannedText("Connections Checking\nEnding Balance $42.00")),
            Box::new(CannedText("")),
        );

        let record = processor.process(&path, "").unwrap();

        assert_eq!(record.bank, Some(BankId::Bank2));
        assert_eq!(record.fields.total_balance.as_deref(), Some("42.00"));
        assert_eq!(record.source_file, path.display().to_string());
        assert_eq!(record.error, None);
    }

    #[test]
    fn test_unclassified_document() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "other.pdf");
        let processor = processor(Box::new(CannedText("Quarterly newsletter")), Box::new(CannedText("")));

        let record = processor.process(&path, "").unwrap();

        assert_eq!(record.bank, Some(BankId::Unknown));
        assert_eq!(record.fields, FieldRecord::absent());
        assert!(!record.is_error());
    }

    #[test]
    fn test_wrong_password_propagates() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "locked.pdf");
        let processor = processor(Box::new(Rejecting), Box::new(CannedText("ICICI")));

        let err = processor.process(&path, "hunter2").unwrap_err();

        assert!(err.is_authentication());
        assert!(matches!(err, CardStmtError::Pdf(PdfError::InvalidPassword)));
    }

    #[test]
    fn test_missing_file_propagates() {
        let dir = TempDir::new().unwrap();
        let err = StatementProcessor::default()
            .process(&dir.path().join("absent.pdf"), "")
            .unwrap_err();

        assert!(matches!(err, CardStmtError::Io(_)));
    }

    #[test]
    fn test_unreadable_pdf_fails_with_both_causes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.pdf");
        fs::write(&path, b"not a pdf at all").unwrap();

        let err = StatementProcessor::default().process(&path, "").unwrap_err();

        assert!(matches!(err, CardStmtError::Pdf(PdfError::ExtractionFailed { .. })));
        assert!(!err.is_authentication());
    }
}
