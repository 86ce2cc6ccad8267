//! Bank2: "Connections Checking" deposit account statement.
//!
//! A checking statement has no payment due date or minimum payment, so
//! those fields are always absent.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::{BankId, FieldRecord};
use crate::statement::rules::{capture_first, clean_amount, last4_from_number_block};
use crate::statement::StatementTemplate;

lazy_static! {
    static ref ENDING_BALANCE: Regex = Regex::new(
        r"(?is)Ending\s*Balance.*?\$([\d,]+(?:\.\d{2})?)"
    ).unwrap();

    static ref PRIMARY_ACCOUNT: Regex = Regex::new(
        r"(?i)Primary\s*Account\s*Number[:\s#]*([0-9\s]+)"
    ).unwrap();

    static ref ACCOUNT_FALLBACK: Regex = Regex::new(
        r"(?i)Account\s*[#No\.]?\s*[:#]*\s*([0-9\s]{6,})"
    ).unwrap();

    // "March 31, 2024"
    static ref STATEMENT_DATE: Regex = Regex::new(
        r"(?i)Statement\s*Date[:\s]*([A-Za-z]+\s+\d{1,2},\s*\d{4})"
    ).unwrap();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bank2Template;

impl StatementTemplate for Bank2Template {
    fn bank(&self) -> BankId {
        BankId::Bank2
    }

    fn extract_fields(&self, text: &str) -> FieldRecord {
        let account = capture_first(&PRIMARY_ACCOUNT, text).or_else(|| capture_first(&ACCOUNT_FALLBACK, text));

        FieldRecord {
            total_balance: capture_first(&ENDING_BALANCE, text).map(|v| clean_amount(&v)),
            payment_due_date: None,
            minimum_payment: None,
            last4: account.and_then(|v| last4_from_number_block(&v)),
            statement_closing_date: capture_first(&STATEMENT_DATE, text),
        }
    }
}
