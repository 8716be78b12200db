//! Rules shared by the expense tracker server and its browser enhancement layer.
//!
//! Everything in this crate is pure: the same validation and formatting code
//! runs in the browser (compiled to WebAssembly) and on the server, so a
//! submission the browser lets through is judged by exactly the same rules
//! when it arrives.

#![warn(missing_docs)]

mod format;
pub mod markup;
mod validation;

pub use format::{
    CURRENCY_SYMBOL, INVALID_DATE, format_currency, format_currency_str, format_date,
    format_display_date, parse_float_prefix,
};
pub use validation::{ExpenseSubmission, ValidationError, ValidationErrors, parse_amount};
