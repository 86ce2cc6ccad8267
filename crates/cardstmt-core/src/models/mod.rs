//! Data models: configuration and statement records.

pub mod config;
pub mod record;

pub use config::{BatchConfig, ClassifierConfig, CueConfig, OutputConfig, PdfConfig, StatementConfig, TextEngine};
pub use record::{BankId, FieldRecord, ResultRecord};
