//! Bank1: "Building Blocks" student handout statement (USD).

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::{BankId, FieldRecord};
use crate::statement::rules::{capture_first, capture_last, clean_amount, last4_from_number_block};
use crate::statement::StatementTemplate;

lazy_static! {
    // Printed in the summary box and again in the account activity; the last one is current
    static ref NEW_BALANCE: Regex = Regex::new(
        r"(?i)New\s*Balance[:\s]*\$?([\d,]+(?:\.\d{2})?)"
    ).unwrap();

    static ref PAYMENT_DUE_DATE: Regex = Regex::new(
        r"(?i)Payment\s*Due\s*Date[:\s]*([A-Za-z0-9/\-–]+)"
    ).unwrap();

    static ref MINIMUM_PAYMENT: Regex = Regex::new(
        r"(?i)Minimum\s*Payment(?:\s*Due)?[:\s]*\$?([\d,]+(?:\.\d{2})?)"
    ).unwrap();

    static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"(?i)Account\s*Number[:\s]*([\d\-\s]+)"
    ).unwrap();

    // "Opening/Closing Date 01/02/2024 – 01/31/2024"
    static ref BILLING_PERIOD: Regex = Regex::new(
        r"(?i)Opening/Closing\s*Date\s*([A-Za-z0-9/\-]+)\s*[–-]\s*([A-Za-z0-9/\-]+)"
    ).unwrap();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bank1Template;

impl StatementTemplate for Bank1Template {
    fn bank(&self) -> BankId {
        BankId::Bank1
    }

    fn extract_fields(&self, text: &str) -> FieldRecord {
        FieldRecord {
            total_balance: capture_last(&NEW_BALANCE, text).map(|v| clean_amount(&v)),
            payment_due_date: capture_first(&PAYMENT_DUE_DATE, text),
            minimum_payment: capture_first(&MINIMUM_PAYMENT, text).map(|v| clean_amount(&v)),
            last4: capture_first(&ACCOUNT_NUMBER, text).and_then(|v| last4_from_number_block(&v)),
            statement_closing_date: BILLING_PERIOD
                .captures(text)
                .and_then(|caps| caps.get(2))
                .map(|m| m.as_str().trim().to_string()),
        }
    }
}
