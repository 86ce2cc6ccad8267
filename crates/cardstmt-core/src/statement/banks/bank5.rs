//! Bank5: IDFC FIRST credit card statement (INR).
//!
//! Labels and values sit in separate table cells, so the extracted text
//! often puts a value several lines below its label; the label windows
//! are wider than for the other banks.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::{BankId, FieldRecord};
use crate::statement::rules::patterns::{AMOUNT_INR, DATE_NUMERIC};
use crate::statement::rules::{capture_first, clean_amount, find_value_after_label, last4_from_number_block};
use crate::statement::StatementTemplate;

const LABEL_WINDOW: usize = 160;

lazy_static! {
    static ref TOTAL_DUE_LABEL: Regex = Regex::new(r"(?i)Total\s*Amount\s*Due\b").unwrap();
    static ref DUE_DATE_LABEL: Regex = Regex::new(r"(?i)Payment\s*Due\s*Date\b").unwrap();
    static ref MINIMUM_DUE_LABEL: Regex = Regex::new(r"(?i)Minimum\s*Amount\s*Due\b").unwrap();

    static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"(?i)Account\s*Number\s*:?\s*([\d\s]+)"
    ).unwrap();

    static ref STATEMENT_DATE: Regex = Regex::new(
        r"(?i)Statement\s*Date\s*\n?\s*([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})"
    ).unwrap();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bank5Template;

impl StatementTemplate for Bank5Template {
    fn bank(&self) -> BankId {
        BankId::Bank5
    }

    fn extract_fields(&self, text: &str) -> FieldRecord {
        let amount = |label: &Regex| {
            find_value_after_label(text, label, &AMOUNT_INR, LABEL_WINDOW).map(|v| clean_amount(&v))
        };

        FieldRecord {
            total_balance: amount(&TOTAL_DUE_LABEL),
            payment_due_date: find_value_after_label(text, &DUE_DATE_LABEL, &DATE_NUMERIC, LABEL_WINDOW),
            minimum_payment: amount(&MINIMUM_DUE_LABEL),
            last4: capture_first(&ACCOUNT_NUMBER, text).and_then(|v| last4_from_number_block(&v)),
            statement_closing_date: capture_first(&STATEMENT_DATE, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STATEMENT: &str = "\
IDFC FIRST Bank    www.idfcbank.com
Customer Relationship No. 123456789
Account Number : 5123 4567 8901 2345
Statement Date
12/03/2024
Total Amount Due
r 45,210.50
Minimum Amount Due
r2,260.00
Payment Due Date
01/04/2024
";

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_extract_fields() {
        assert_eq!(
            Bank5Template.extract_fields(STATEMENT),
            FieldRecord {
                total_balance: some("45,210.50"),
                payment_due_date: some("01/04/2024"),
                minimum_payment: some("2,260.00"),
                last4: some("2345"),
                statement_closing_date: some("12/03/2024"),
            }
        );
    }

    #[test]
    fn test_rupee_symbol_and_credit_marker() {
        let text = "Total Amount Due\n₹ 1,234.56 CR\n";
        assert_eq!(Bank5Template.extract_fields(text).total_balance, some("1,234.56"));
    }

    #[test]
    fn test_lakh_grouped_amounts() {
        let text = "Total Amount Due\n₹ 1,00,000.00\nMinimum Amount Due\n₹ 12,50,000.00";
        let fields = Bank5Template.extract_fields(text);

        assert_eq!(fields.total_balance, some("1,00,000.00"));
        assert_eq!(fields.minimum_payment, some("12,50,000.00"));
    }

    #[test]
    fn test_due_date_beyond_window() {
        let filler = "x".repeat(LABEL_WINDOW + 10);
        let text = format!("Payment Due Date {filler} 01/04/2024");
        assert_eq!(Bank5Template.extract_fields(&text).payment_due_date, None);
    }
}
