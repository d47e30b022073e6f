//! CLI commands for reports
//!
//! Each command loads an API payload and prints a terminal rendering of one
//! chart view.

use std::path::Path;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{FinsightError, FinsightResult};
use crate::models::{BudgetStatus, CategoryBreakdown, Transaction};
use crate::reports::{
    BudgetComparisonReport, CategoryBreakdownReport, MonthlyTrendsReport, TypeBreakdownReport,
};
use crate::storage::read_records;

/// Print monthly income and expense bars
pub fn handle_trends_report(settings: &Settings, file: &Path) -> FinsightResult<()> {
    let transactions: Vec<Transaction> = read_records(file)?;
    let report = MonthlyTrendsReport::generate(&transactions, settings.calendar);

    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the income vs expense split and totals
pub fn handle_breakdown_report(settings: &Settings, file: &Path) -> FinsightResult<()> {
    let transactions: Vec<Transaction> = read_records(file)?;
    let report = TypeBreakdownReport::generate(&transactions);

    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print spending by category
pub fn handle_categories_report(settings: &Settings, file: &Path) -> FinsightResult<()> {
    let rows: Vec<CategoryBreakdown> = read_records(file)?;
    let report = CategoryBreakdownReport::generate(&rows);

    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print budget limits against spending
pub fn handle_budgets_report(settings: &Settings, file: &Path) -> FinsightResult<()> {
    let budgets: Vec<BudgetStatus> = read_records(file)?;
    let report = BudgetComparisonReport::generate(&budgets);

    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print one page of the transaction register
pub fn handle_transactions_list(
    settings: &Settings,
    file: &Path,
    page: usize,
    page_size: Option<usize>,
) -> FinsightResult<()> {
    if page == 0 {
        return Err(FinsightError::Validation(
            "Page numbers start at 1".to_string(),
        ));
    }

    let transactions: Vec<Transaction> = read_records(file)?;
    let page_size = page_size.unwrap_or(settings.page_size);

    print!(
        "{}",
        format_transaction_register(
            &transactions,
            page,
            page_size,
            settings.calendar,
            &settings.currency_symbol,
        )
    );
    Ok(())
}

/// Print one transaction in full
pub fn handle_transaction_details(
    settings: &Settings,
    file: &Path,
    id: &str,
) -> FinsightResult<()> {
    let transactions: Vec<Transaction> = read_records(file)?;
    let txn = transactions
        .iter()
        .find(|txn| txn.id.as_str() == id)
        .ok_or_else(|| FinsightError::Validation(format!("No transaction with id {}", id)))?;

    print!(
        "{}",
        format_transaction_details(txn, settings.calendar, &settings.currency_symbol)
    );
    Ok(())
}
