//! Error types for the cardstmt-core library.

use thiserror::Error;

/// Main error type for the cardstmt library.
#[derive(Error, Debug)]
pub enum CardStmtError {
    /// PDF text extraction error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CardStmtError {
    /// Whether the failure was a rejected or missing document password.
    pub fn is_authentication(&self) -> bool {
        matches!(self, CardStmtError::Pdf(e) if e.is_authentication())
    }
}

/// Errors related to PDF text extraction.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// An engine failed while producing text.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// An engine produced no text.
    #[error("no text content extracted")]
    Empty,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF is encrypted and no password was supplied.
    #[error("PDF is encrypted and requires a password")]
    PasswordRequired,

    /// The supplied password was rejected.
    #[error("incorrect password for encrypted PDF")]
    InvalidPassword,

    /// Both extraction engines failed or produced empty content.
    #[error("failed to extract text from PDF with both engines: primary ({primary}); secondary ({secondary})")]
    ExtractionFailed { primary: String, secondary: String },
}

impl PdfError {
    /// Whether this is an authentication failure rather than missing content.
    pub fn is_authentication(&self) -> bool {
        matches!(self, PdfError::PasswordRequired | PdfError::InvalidPassword)
    }
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, CardStmtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_errors() {
        assert!(PdfError::PasswordRequired.is_authentication());
        assert!(PdfError::InvalidPassword.is_authentication());
        assert!(!PdfError::Empty.is_authentication());

        let err: CardStmtError = PdfError::InvalidPassword.into();
        assert!(err.is_authentication());

        let io = CardStmtError::Io(std::io::Error::other("boom"));
        assert!(!io.is_authentication());
    }

    #[test]
    fn test_extraction_failed_carries_both_causes() {
        let err = PdfError::ExtractionFailed {
            primary: "pdf-extract: no text content extracted".to_string(),
            secondary: "lopdf: failed to parse PDF: invalid file header".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("pdf-extract: no text content extracted"));
        assert!(message.contains("lopdf: failed to parse PDF"));
    }
}
