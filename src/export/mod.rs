//! Export module for finsight
//!
//! Turns transaction and budget lists into documents a host can save or
//! print:
//! - CSV: spreadsheet-compatible text, one row per record
//! - HTML: a print-ready report for the browser's print-to-PDF
//! - JSON: chart-ready monthly trend series
//!
//! Empty input never produces a header-only document. It produces
//! [`ExportOutput::Empty`], whose text is the "No ... to export" message.

pub mod csv;
pub mod html;
pub mod json;

use chrono::NaiveDate;
use std::fmt;

use crate::config::Settings;
use crate::models::{
    format_decimal, BudgetStatus, CalendarReference, RecurringPattern, Transaction,
};
use crate::reports::monthly_trends::INVALID_DATE_LABEL;

pub use self::csv::{budgets_csv, transactions_csv, write_budgets_csv, write_transactions_csv};
pub use html::{budgets_html, transactions_html};
pub use json::{export_monthly_trends_json, monthly_trends_json};

/// What a document lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Transactions,
    Budgets,
    Trends,
}

impl ExportKind {
    /// Text shown instead of a document when there is nothing to export
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::Transactions => "No transactions to export",
            Self::Budgets => "No budgets to export",
            Self::Trends => "No transaction data to export",
        }
    }

    /// Default file name for an export made on `date`,
    /// e.g. `transactions-2024-01-31.csv`
    pub fn file_name(&self, date: NaiveDate, extension: &str) -> String {
        let stem = match self {
            Self::Transactions => "transactions",
            Self::Budgets => "budgets",
            Self::Trends => "trends",
        };
        format!("{}-{}.{}", stem, date.format("%Y-%m-%d"), extension)
    }
}

/// Result of an export: either nothing to export or a finished document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    Empty(ExportKind),
    Document(String),
}

impl ExportOutput {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// The document text, if there was anything to export
    pub fn document(&self) -> Option<&str> {
        match self {
            Self::Empty(_) => None,
            Self::Document(text) => Some(text),
        }
    }
}

impl fmt::Display for ExportOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(kind) => f.write_str(kind.empty_message()),
            Self::Document(text) => f.write_str(text),
        }
    }
}

/// Formatting inputs shared by every export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportContext {
    /// Calendar the stored dates are read in
    pub calendar: CalendarReference,
    /// Prefix for amounts in HTML documents (never used in CSV)
    pub currency_symbol: String,
    /// Date printed in the "Generated on" line
    pub generated_on: NaiveDate,
}

impl ExportContext {
    pub fn new(generated_on: NaiveDate) -> Self {
        Self {
            calendar: CalendarReference::default(),
            currency_symbol: "$".to_string(),
            generated_on,
        }
    }

    pub fn from_settings(settings: &Settings, generated_on: NaiveDate) -> Self {
        Self {
            calendar: settings.calendar,
            currency_symbol: settings.currency_symbol.clone(),
            generated_on,
        }
    }
}

/// Column headers of the transaction CSV
pub const TRANSACTION_HEADERS: [&str; 7] = [
    "Date",
    "Description",
    "Category",
    "Type",
    "Amount",
    "Recurring",
    "Pattern",
];

/// Column headers of the budget CSV
pub const BUDGET_HEADERS: [&str; 6] = [
    "Category",
    "Budget Limit",
    "Spent",
    "Remaining",
    "Percentage Used",
    "Status",
];

/// Short numeric date, e.g. `1/15/2024`; `Invalid Date` when unreadable
pub fn format_display_date(raw: &str, calendar: CalendarReference) -> String {
    match calendar.calendar_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

/// One decimal place and a percent sign, e.g. `70.5%`
pub fn format_percentage(value: f64) -> String {
    format!("{}%", format_decimal(value, 1))
}

fn format_recurring(is_recurring: bool) -> &'static str {
    if is_recurring {
        "Yes"
    } else {
        "No"
    }
}

fn format_pattern(pattern: Option<RecurringPattern>) -> String {
    pattern.map_or_else(|| "N/A".to_string(), |p| p.to_string())
}

/// Cells of one transaction row, in [`TRANSACTION_HEADERS`] order
pub fn transaction_cells(txn: &Transaction, calendar: CalendarReference) -> [String; 7] {
    [
        format_display_date(&txn.date, calendar),
        txn.description.clone(),
        txn.category.clone(),
        txn.transaction_type.to_string(),
        txn.amount.to_fixed(),
        format_recurring(txn.is_recurring).to_string(),
        format_pattern(txn.recurring_pattern),
    ]
}

/// Cells of one budget row, in [`BUDGET_HEADERS`] order
pub fn budget_cells(budget: &BudgetStatus) -> [String; 6] {
    [
        budget.category.clone(),
        budget.budget_limit.to_fixed(),
        budget.spent.to_fixed(),
        budget.remaining.to_fixed(),
        format_percentage(budget.percentage_used),
        budget.status.to_string(),
    ]
}
