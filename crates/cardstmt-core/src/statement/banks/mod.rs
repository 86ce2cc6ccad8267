//! Per-bank statement templates.
//!
//! Each template maps the five canonical fields onto one bank's label
//! vocabulary. Dates are returned exactly as printed; amounts go through
//! [`clean_amount`](super::rules::clean_amount) and card numbers through
//! [`last4_from_number_block`](super::rules::last4_from_number_block).

mod bank1;
mod bank2;
mod bank3;
mod bank4;
mod bank5;

pub use bank1::Bank1Template;
pub use bank2::Bank2Template;
pub use bank3::Bank3Template;
pub use bank4::Bank4Template;
pub use bank5::Bank5Template;
