//! Statement classification and field extraction module.

pub mod banks;
pub mod classifier;
mod parser;
mod processor;
mod registry;
pub mod rules;

pub use classifier::{BankClassifier, CueRule, BUILTIN_CUES};
pub use parser::{ParsedStatement, StatementParser};
pub use processor::StatementProcessor;
pub use registry::TemplateRegistry;

use crate::models::record::{BankId, FieldRecord};

/// Field extraction for one statement template family.
///
/// Implementations are total: a field that cannot be located is left
/// `None`, never reported as an error.
pub trait StatementTemplate: Send + Sync {
    /// Bank this template handles.
    fn bank(&self) -> BankId;

    /// Extract the five canonical fields from statement text.
    fn extract_fields(&self, text: &str) -> FieldRecord;
}
