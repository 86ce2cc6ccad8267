//! Bank4: generic US sample credit card statement with upper-case labels.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::{BankId, FieldRecord};
use crate::statement::rules::patterns::AMOUNT_USD;
use crate::statement::rules::{capture_first, clean_amount, find_value_after_label, last4_from_number_block};
use crate::statement::StatementTemplate;

lazy_static! {
    static ref NEW_BALANCE_LABEL: Regex = Regex::new(r"(?i)NEW\s+BALANCE\b").unwrap();

    // "Previous Balance - Payments + Purchases = New Balance"
    static ref NEW_BALANCE_EQUATION: Regex = Regex::new(r"(?i)=\s*New\s*Balance\b").unwrap();

    static ref MINIMUM_DUE_LABEL: Regex = Regex::new(r"(?i)MINIMUM\s*PAYMENT\s*DUE\b").unwrap();

    static ref PAYMENT_DUE_DATE: Regex = Regex::new(
        r"(?i)PAYMENT\s*DUE\s*DATE\s*\n?\s*(\d{1,2}/\d{1,2}/\d{2,4})"
    ).unwrap();

    static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"(?i)ACCOUNT\s*NUMBER\s*\n?\s*([\d\-\s]+)"
    ).unwrap();

    static ref CLOSING_DATE: Regex = Regex::new(
        r"(?i)Closing\s*Date\s*\n?\s*([0-9/\-]+)"
    ).unwrap();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bank4Template;

impl StatementTemplate for Bank4Template {
    fn bank(&self) -> BankId {
        BankId::Bank4
    }

    fn extract_fields(&self, text: &str) -> FieldRecord {
        let total = find_value_after_label(text, &NEW_BALANCE_LABEL, &AMOUNT_USD, 30)
            .or_else(|| find_value_after_label(text, &NEW_BALANCE_EQUATION, &AMOUNT_USD, 30));

        FieldRecord {
            total_balance: total.map(|v| clean_amount(&v)),
            payment_due_date: capture_first(&PAYMENT_DUE_DATE, text),
            minimum_payment: find_value_after_label(text, &MINIMUM_DUE_LABEL, &AMOUNT_USD, 40)
                .map(|v| clean_amount(&v)),
            last4: capture_first(&ACCOUNT_NUMBER, text).and_then(|v| last4_from_number_block(&v)),
            statement_closing_date: capture_first(&CLOSING_DATE, text),
        }
    }
}
