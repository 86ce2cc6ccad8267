//! Common regex patterns shared by the statement templates.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount cleanup
    pub static ref LEADING_CURRENCY: Regex = Regex::new(
        r"^[₹$r\s]+"
    ).unwrap();

    pub static ref CR_MARKER: Regex = Regex::new(
        r"(?i)\s*CR\b"
    ).unwrap();

    // Grouped amounts, optionally prefixed by a rupee sign or its OCR "r".
    // Lakh groups of two digits may precede the final thousands group
    // (12,345.67 / 1,00,000.00 / 12,50,000 / 617.28)
    pub static ref AMOUNT_INR: Regex = Regex::new(
        r"(?i)([₹r]?\s*(?:\d{1,3}(?:,\d{2})*(?:,\d{3})+(?:\.\d{2})?|\d+\.\d{2}))"
    ).unwrap();

    // Dollar amounts with optional sign and cents ($1,234.56 / 25)
    pub static ref AMOUNT_USD: Regex = Regex::new(
        r"\$?([\d,]+(?:\.\d{2})?)"
    ).unwrap();

    // Numeric dates (MM/DD/YYYY or DD/MM/YYYY, 2- or 4-digit year)
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})"
    ).unwrap();
}
