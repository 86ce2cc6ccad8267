//! Bank detection followed by template dispatch.

use tracing::{debug, info};

use super::{BankClassifier, TemplateRegistry};
use crate::models::config::ClassifierConfig;
use crate::models::record::{BankId, FieldRecord};

/// Result of parsing statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatement {
    pub bank: BankId,
    pub fields: FieldRecord,
}

/// Classifies statement text and applies the matching template.
pub struct StatementParser {
    classifier: BankClassifier,
    registry: TemplateRegistry,
}

impl StatementParser {
    pub fn new(classifier: BankClassifier, registry: TemplateRegistry) -> Self {
        Self { classifier, registry }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(BankClassifier::from_config(config), TemplateRegistry::builtin())
    }

    pub fn classifier(&self) -> &BankClassifier {
        &self.classifier
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Identify the bank and extract its fields.
    ///
    /// Unclassified text is not an error: it yields `BankId::Unknown` with
    /// every field absent.
    pub fn identify_and_parse(&self, text: &str) -> ParsedStatement {
        let bank = self.classifier.classify(text);
        if !self.registry.contains(bank) {
            debug!("No template for {}", bank);
        }

        let fields = self.registry.extract(bank, text);
        info!("Parsed {} statement: {}/5 fields found", bank, fields.present_count());

        ParsedStatement { bank, fields }
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new(BankClassifier::builtin(), TemplateRegistry::builtin())
    }
}
