//! CSV Export functionality
//!
//! Writes transactions and budget statuses as spreadsheet-compatible CSV.
//! Cells are quoted only when they hold a comma, a double quote or a line
//! break; embedded quotes are doubled. Rows end in `\n`.

use std::io::Write;

use super::{
    budget_cells, transaction_cells, ExportKind, ExportOutput, BUDGET_HEADERS,
    TRANSACTION_HEADERS,
};
use crate::error::{FinsightError, FinsightResult};
use crate::models::{BudgetStatus, CalendarReference, Transaction};

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Write the transaction header and one row per transaction
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    calendar: CalendarReference,
    writer: W,
) -> FinsightResult<()> {
    let mut wtr = csv_writer(writer);

    wtr.write_record(TRANSACTION_HEADERS)?;
    for txn in transactions {
        wtr.write_record(transaction_cells(txn, calendar))?;
    }
    wtr.flush()?;

    tracing::debug!(rows = transactions.len(), "wrote transactions csv");
    Ok(())
}

/// Write the budget header and one row per budget status
pub fn write_budgets_csv<W: Write>(budgets: &[BudgetStatus], writer: W) -> FinsightResult<()> {
    let mut wtr = csv_writer(writer);

    wtr.write_record(BUDGET_HEADERS)?;
    for budget in budgets {
        wtr.write_record(budget_cells(budget))?;
    }
    wtr.flush()?;

    tracing::debug!(rows = budgets.len(), "wrote budgets csv");
    Ok(())
}

/// Transactions as a CSV document, or [`ExportOutput::Empty`] for no input
///
/// The document has no trailing newline.
pub fn transactions_csv(
    transactions: &[Transaction],
    calendar: CalendarReference,
) -> FinsightResult<ExportOutput> {
    if transactions.is_empty() {
        return Ok(ExportOutput::Empty(ExportKind::Transactions));
    }

    let mut buf = Vec::new();
    write_transactions_csv(transactions, calendar, &mut buf)?;
    finish_document(buf)
}

/// Budget statuses as a CSV document, or [`ExportOutput::Empty`] for no input
pub fn budgets_csv(budgets: &[BudgetStatus]) -> FinsightResult<ExportOutput> {
    if budgets.is_empty() {
        return Ok(ExportOutput::Empty(ExportKind::Budgets));
    }

    let mut buf = Vec::new();
    write_budgets_csv(budgets, &mut buf)?;
    finish_document(buf)
}

fn finish_document(mut buf: Vec<u8>) -> FinsightResult<ExportOutput> {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    let text = String::from_utf8(buf)
        .map_err(|e| FinsightError::Export(format!("CSV is not valid UTF-8: {}", e)))?;
    Ok(ExportOutput::Document(text))
}
