//! Bank detection from cue phrases.

use tracing::debug;

use crate::models::config::{ClassifierConfig, CueConfig};
use crate::models::record::BankId;

/// Built-in cue phrases in priority order. The first phrase contained in the
/// lower-cased text decides the bank, so overlapping cues resolve by position.
pub const BUILTIN_CUES: &[(&str, BankId)] = &[
    ("building blocks student handout", BankId::Bank1),
    ("connections checking", BankId::Bank2),
    ("1000 walnut", BankId::Bank2),
    ("icici", BankId::Bank3),
    ("your total amount due", BankId::Bank3),
    ("sample credit card statement", BankId::Bank4),
    ("great lakes higher education", BankId::Bank4),
    ("idfcbank", BankId::Bank5),
    ("customer relationship no.", BankId::Bank5),
];

/// A single cue phrase rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueRule {
    /// Lower-cased phrase.
    pub phrase: String,
    pub bank: BankId,
}

impl CueRule {
    pub fn new(phrase: &str, bank: BankId) -> Self {
        Self {
            phrase: phrase.to_lowercase(),
            bank,
        }
    }
}

impl From<&CueConfig> for CueRule {
    fn from(cue: &CueConfig) -> Self {
        CueRule::new(&cue.phrase, cue.bank)
    }
}

/// Ordered, first-match-wins bank classifier.
#[derive(Debug, Clone)]
pub struct BankClassifier {
    rules: Vec<CueRule>,
}

impl BankClassifier {
    /// Classifier with the built-in cue table.
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_CUES
                .iter()
                .map(|(phrase, bank)| CueRule::new(phrase, *bank))
                .collect(),
        }
    }

    /// Classifier with built-in cues followed by configured ones.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::builtin().with_extra_cues(config.extra_cues.iter().map(CueRule::from))
    }

    /// Append cues after the existing ones (lowest priority).
    pub fn with_extra_cues(mut self, cues: impl IntoIterator<Item = CueRule>) -> Self {
        self.rules
            .extend(cues.into_iter().filter(|cue| !cue.phrase.trim().is_empty()));
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[CueRule] {
        &self.rules
    }

    /// Identify the bank of a statement; `BankId::Unknown` when no cue matches.
    pub fn classify(&self, text: &str) -> BankId {
        let lowered = text.to_lowercase();

        match self.rules.iter().find(|rule| lowered.contains(&rule.phrase)) {
            Some(rule) => {
                debug!("Matched cue {:?} -> {}", rule.phrase, rule.bank);
                rule.bank
            }
            None => {
                debug!("No cue phrase matched; bank unknown");
                BankId::Unknown
            }
        }
    }
}

impl Default for BankClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
