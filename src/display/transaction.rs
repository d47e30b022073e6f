//! Transaction display formatting
//!
//! Register views for the terminal, paged the same way the web client's
//! transaction list is.

use crate::display::report::{separator, truncate};
use crate::export::format_display_date;
use crate::models::{CalendarReference, Transaction};
use crate::pagination::{PageIndicator, Pagination};

const REGISTER_WIDTH: usize = 72;

/// Signed amount as shown in the register: `+$1000.00` or `-$15.50`
fn signed_amount(txn: &Transaction, symbol: &str) -> String {
    let sign = if txn.is_income() { '+' } else { '-' };
    format!("{}{}", sign, txn.amount.format_with_symbol(symbol))
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(
    txn: &Transaction,
    calendar: CalendarReference,
    symbol: &str,
) -> String {
    let recurring = if txn.is_recurring { "↻" } else { " " };
    let description = if txn.description.is_empty() {
        "(no description)"
    } else {
        &txn.description
    };

    format!(
        "{} {:10} {:24} {:16} {:>14}",
        recurring,
        format_display_date(&txn.date, calendar),
        truncate(description, 24),
        truncate(&txn.category, 16),
        signed_amount(txn, symbol)
    )
}

/// Render the page strip, e.g. `‹ 1 … 4 [5] 6 … 10 ›`
pub fn format_page_indicators(pagination: &Pagination) -> String {
    let mut parts = Vec::new();

    parts.push(if pagination.can_go_prev() { "‹" } else { " " }.to_string());
    for indicator in pagination.indicators() {
        parts.push(match indicator {
            PageIndicator::Page(page) => page.to_string(),
            PageIndicator::CurrPage(page) => format!("[{}]", page),
            PageIndicator::Ellipsis => "…".to_string(),
        });
    }
    parts.push(if pagination.can_go_next() { "›" } else { " " }.to_string());

    parts.join(" ").trim_end().to_string()
}

/// Format one page of transactions as a register
///
/// `page` is 1-based and clamped to the available pages.
pub fn format_transaction_register(
    transactions: &[Transaction],
    page: usize,
    page_size: usize,
    calendar: CalendarReference,
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let pagination = Pagination::for_items(page, transactions.len(), page_size);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:10} {:24} {:16} {:>14}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&separator(REGISTER_WIDTH));
    output.push('\n');

    for txn in pagination.slice(transactions, page_size) {
        output.push_str(&format_transaction_row(txn, calendar, symbol));
        output.push('\n');
    }

    output.push_str(&separator(REGISTER_WIDTH));
    output.push('\n');

    if pagination.total() > 1 {
        output.push_str(&format_page_indicators(&pagination));
        output.push('\n');
    }
    output.push_str(&format!(
        "{} ({} transactions)\n",
        pagination.info(),
        transactions.len()
    ));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    calendar: CalendarReference,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        format_display_date(&txn.date, calendar)
    ));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    if txn.is_recurring {
        let pattern = txn
            .recurring_pattern
            .map_or_else(|| "N/A".to_string(), |p| p.to_string());
        output.push_str(&format!("Recurring:   {}\n", pattern));

        if let Some(next) = &txn.next_recurrence_date {
            output.push_str(&format!(
                "Next:        {}\n",
                format_display_date(next, calendar)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecurringPattern};

    fn many(count: usize) -> Vec<Transaction> {
        (1..=count)
            .map(|i| {
                Transaction::expense(i.to_string(), Money::from_cents(100 * i as i64), "2024-05-01")
                    .with_category("Misc")
                    .with_description(format!("Item {}", i))
            })
            .collect()
    }

    #[test]
    fn test_row_shows_sign_and_recurrence() {
        let txn = Transaction::income("1", Money::from_cents(100000), "2024-01-01")
            .with_category("Salary")
            .with_description("Monthly salary")
            .recurring(RecurringPattern::Monthly);

        let row = format_transaction_row(&txn, CalendarReference::Utc, "$");
        assert!(row.starts_with('↻'));
        assert!(row.contains("1/1/2024"));
        assert!(row.ends_with("+$1000.00"));
    }

    #[test]
    fn test_empty_register() {
        let output = format_transaction_register(&[], 1, 10, CalendarReference::Utc, "$");
        assert_eq!(output, "No transactions found.\n");
    }

    #[test]
    fn test_register_pages() {
        let txns = many(23);

        let output = format_transaction_register(&txns, 3, 10, CalendarReference::Utc, "$");
        assert!(output.contains("Item 21"));
        assert!(output.contains("Item 23"));
        assert!(!output.contains("Item 20 "));
        assert!(output.contains("‹ 1 2 [3]"));
        assert!(output.contains("Page 3 of 3 (23 transactions)"));
    }

    #[test]
    fn test_single_page_has_no_strip() {
        let output = format_transaction_register(&many(3), 1, 10, CalendarReference::Utc, "$");
        assert!(!output.contains('['));
        assert!(output.contains("Page 1 of 1"));
    }

    #[test]
    fn test_page_indicators_collapse() {
        let strip = format_page_indicators(&Pagination::new(5, 10));
        assert_eq!(strip, "‹ 1 … 4 [5] 6 … 10 ›");

        let strip = format_page_indicators(&Pagination::new(1, 2));
        assert_eq!(strip, "  [1] 2 ›");
    }

    #[test]
    fn test_details() {
        let mut txn = Transaction::expense("t-9", Money::from_cents(1599), "2024-06-03")
            .with_category("Streaming")
            .recurring(RecurringPattern::Monthly);
        txn.next_recurrence_date = Some("2024-07-03".to_string());

        let details = format_transaction_details(&txn, CalendarReference::Utc, "$");
        assert!(details.contains("Transaction: t-9"));
        assert!(details.contains("Type:        Expense"));
        assert!(details.contains("Amount:      $15.99"));
        assert!(details.contains("Recurring:   Monthly"));
        assert!(details.contains("Next:        7/3/2024"));
        assert!(!details.contains("Description:"));
    }
}
