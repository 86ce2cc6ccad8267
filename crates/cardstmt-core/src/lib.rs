//! Core library for credit card statement parsing.
//!
//! This crate provides:
//! - PDF text extraction with a two-engine fallback (pdf-extract, lopdf)
//! - Bank detection from ordered cue phrases
//! - Per-bank regex templates for balance, due date, minimum payment,
//!   card last-4 and statement closing date

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{CardStmtError, PdfError, Result};
pub use models::config::StatementConfig;
pub use models::record::{BankId, FieldRecord, ResultRecord};
pub use pdf::{PdfExtractor, TextBackend};
pub use statement::{
    BankClassifier, ParsedStatement, StatementParser, StatementProcessor, StatementTemplate, TemplateRegistry,
};
