//! Display formatting for terminal output
//!
//! Bar and alignment helpers for the report views, and the paged
//! transaction register.

pub mod report;
pub mod transaction;

pub use transaction::{
    format_page_indicators, format_transaction_details, format_transaction_register,
    format_transaction_row,
};
