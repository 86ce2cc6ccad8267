//! Statement records produced by the extraction pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a known statement template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankId {
    Bank1,
    Bank2,
    Bank3,
    Bank4,
    Bank5,
    /// No cue phrase matched.
    Unknown,
}

impl BankId {
    /// All identifiers with a dedicated template.
    pub const KNOWN: [BankId; 5] = [
        BankId::Bank1,
        BankId::Bank2,
        BankId::Bank3,
        BankId::Bank4,
        BankId::Bank5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BankId::Bank1 => "bank1",
            BankId::Bank2 => "bank2",
            BankId::Bank3 => "bank3",
            BankId::Bank4 => "bank4",
            BankId::Bank5 => "bank5",
            BankId::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != BankId::Unknown
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BankId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bank1" => Ok(BankId::Bank1),
            "bank2" => Ok(BankId::Bank2),
            "bank3" => Ok(BankId::Bank3),
            "bank4" => Ok(BankId::Bank4),
            "bank5" => Ok(BankId::Bank5),
            "unknown" => Ok(BankId::Unknown),
            other => Err(format!("unknown bank identifier: {}", other)),
        }
    }
}

/// The five canonical statement fields.
///
/// Every field is always present; `None` marks a value that could not be
/// located and serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub total_balance: Option<String>,
    pub payment_due_date: Option<String>,
    pub minimum_payment: Option<String>,
    pub last4: Option<String>,
    pub statement_closing_date: Option<String>,
}

impl FieldRecord {
    /// Field names in output order.
    pub const FIELD_NAMES: [&'static str; 5] = [
        "total_balance",
        "payment_due_date",
        "minimum_payment",
        "last4",
        "statement_closing_date",
    ];

    /// A record with every field absent.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Field values paired with their names, in output order.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("total_balance", self.total_balance.as_deref()),
            ("payment_due_date", self.payment_due_date.as_deref()),
            ("minimum_payment", self.minimum_payment.as_deref()),
            ("last4", self.last4.as_deref()),
            ("statement_closing_date", self.statement_closing_date.as_deref()),
        ]
    }

    /// Number of fields with a value.
    pub fn present_count(&self) -> usize {
        self.entries().iter().filter(|(_, v)| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }
}

/// Output record for one input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Detected template family, `None` when the document could not be read.
    pub bank: Option<BankId>,

    /// Extracted fields.
    #[serde(flatten)]
    pub fields: FieldRecord,

    /// Path of the originating document.
    pub source_file: String,

    /// Failure description when the document could not be processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultRecord {
    /// Create a record for a successfully read document.
    pub fn new(bank: BankId, fields: FieldRecord, source_file: impl Into<String>) -> Self {
        Self {
            bank: Some(bank),
            fields,
            source_file: source_file.into(),
            error: None,
        }
    }

    /// Create an error-bearing record with every field absent.
    pub fn failed(source_file: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            bank: None,
            fields: FieldRecord::absent(),
            source_file: source_file.into(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
