//! Mapping from bank identifiers to field extraction templates.

use std::collections::HashMap;

use super::banks::{Bank1Template, Bank2Template, Bank3Template, Bank4Template, Bank5Template};
use super::StatementTemplate;
use crate::models::record::{BankId, FieldRecord};

/// Registry of statement templates keyed by bank.
pub struct TemplateRegistry {
    templates: HashMap<BankId, Box<dyn StatementTemplate>>,
}

impl TemplateRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registry with the five built-in templates.
    pub fn builtin() -> Self {
        Self::empty()
            .with(Box::new(Bank1Template))
            .with(Box::new(Bank2Template))
            .with(Box::new(Bank3Template))
            .with(Box::new(Bank4Template))
            .with(Box::new(Bank5Template))
    }

    /// Add a template, builder style.
    pub fn with(mut self, template: Box<dyn StatementTemplate>) -> Self {
        self.register(template);
        self
    }

    /// Add or replace the template for its bank.
    pub fn register(&mut self, template: Box<dyn StatementTemplate>) -> Option<Box<dyn StatementTemplate>> {
        self.templates.insert(template.bank(), template)
    }

    pub fn get(&self, bank: BankId) -> Option<&dyn StatementTemplate> {
        self.templates.get(&bank).map(|t| t.as_ref())
    }

    pub fn contains(&self, bank: BankId) -> bool {
        self.templates.contains_key(&bank)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Run the template registered for `bank`; all fields absent if none is.
    pub fn extract(&self, bank: BankId, text: &str) -> FieldRecord {
        self.get(bank)
            .map(|template| template.extract_fields(text))
            .unwrap_or_default()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
