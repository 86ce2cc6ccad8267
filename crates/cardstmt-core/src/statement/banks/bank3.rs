//! Bank3: ICICI credit card statement (INR).

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::{BankId, FieldRecord};
use crate::statement::rules::patterns::AMOUNT_INR;
use crate::statement::rules::{capture_first, clean_amount, find_value_after_label, last4_from_number_block};
use crate::statement::StatementTemplate;

const AMOUNT_WINDOW: usize = 80;

lazy_static! {
    static ref TOTAL_DUE_LABEL: Regex = Regex::new(
        r"(?i)(?:Your\s+)?Total\s+Amount\s+Due\b"
    ).unwrap();

    // Ungrouped amounts such as "5000" that the windowed search rejects
    static ref TOTAL_DUE_LOOSE: Regex = Regex::new(
        r"(?i)(?:Your\s+)?Total\s+Amount\s+Due[\s\S]{0,60}?([₹r]?\s*\d[\d,]*(?:\.\d{2})?)"
    ).unwrap();

    static ref DUE_DATE: Regex = Regex::new(
        r"(?i)(?:Payment\s+)?Due\s*Date\s*:?\s*(?:\n|\s){0,20}?([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})"
    ).unwrap();

    static ref MINIMUM_DUE_LABEL: Regex = Regex::new(
        r"(?i)Minimum\s+Amount\s+Due\b"
    ).unwrap();

    // "4375 XXXX XXXX 8007"
    static ref CARD_NUMBER: Regex = Regex::new(
        r"(?i)Card\s*Number\s*:?\s*([0-9Xx\s]+)"
    ).unwrap();

    static ref STATEMENT_DATE: Regex = Regex::new(
        r"(?i)Statement\s*Date\s*:?\s*([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})"
    ).unwrap();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bank3Template;

impl Bank3Template {
    fn total_balance(text: &str) -> Option<String> {
        find_value_after_label(text, &TOTAL_DUE_LABEL, &AMOUNT_INR, AMOUNT_WINDOW)
            .or_else(|| capture_first(&TOTAL_DUE_LOOSE, text))
            .map(|v| clean_amount(&v))
            .filter(|v| !v.is_empty())
    }
}

impl StatementTemplate for Bank3Template {
    fn bank(&self) -> BankId {
        BankId::Bank3
    }

    fn extract_fields(&self, text: &str) -> FieldRecord {
        FieldRecord {
            total_balance: Self::total_balance(text),
            payment_due_date: capture_first(&DUE_DATE, text),
            minimum_payment: find_value_after_label(text, &MINIMUM_DUE_LABEL, &AMOUNT_INR, AMOUNT_WINDOW)
                .map(|v| clean_amount(&v)),
            last4: capture_first(&CARD_NUMBER, text).and_then(|v| last4_from_number_block(&v)),
            statement_closing_date: capture_first(&STATEMENT_DATE, text),
        }
    }
}
