//! Print-ready HTML reports
//!
//! Standalone documents meant for a browser's print-to-PDF. All record
//! text goes through maud's escaping.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::{format_display_date, format_percentage, ExportContext, ExportKind, ExportOutput};
use crate::models::{BudgetStatus, Transaction};

const BASE_STYLE: &str = "
    body { font-family: Arial, sans-serif; margin: 20px; }
    h1 { color: #333; }
    .meta { color: #666; margin-bottom: 20px; }
    table { width: 100%; border-collapse: collapse; margin-top: 20px; }
    th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
    th { background-color: #f5f5f5; font-weight: bold; }
    tr:hover { background-color: #f9f9f9; }
    .amount { text-align: right; }
    .centered { text-align: center; }
";

const STATUS_STYLE: &str = "
    .status { font-weight: bold; }
    .status-on-track { color: #10b981; }
    .status-warning { color: #f59e0b; }
    .status-exceeded { color: #ef4444; }
";

fn document(
    title: &str,
    extra_style: Option<&str>,
    ctx: &ExportContext,
    count_label: &str,
    count: usize,
    table: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                title { (title) }
                style
                {
                    (PreEscaped(BASE_STYLE))
                    @if let Some(style) = extra_style {
                        (PreEscaped(style))
                    }
                }
            }

            body
            {
                h1 { (title) }
                div class="meta"
                {
                    p { "Generated on: " (ctx.generated_on.format("%-m/%-d/%Y").to_string()) }
                    p { (count_label) ": " (count) }
                }
                (table)
            }
        }
    }
}

/// Transactions as a printable report, or [`ExportOutput::Empty`] for no input
pub fn transactions_html(transactions: &[Transaction], ctx: &ExportContext) -> ExportOutput {
    if transactions.is_empty() {
        return ExportOutput::Empty(ExportKind::Transactions);
    }

    let table = html! {
        table
        {
            thead
            {
                tr { th { "Date" } th { "Description" } th { "Category" } th { "Type" } th { "Amount" } }
            }
            tbody
            {
                @for txn in transactions {
                    tr
                    {
                        td { (format_display_date(&txn.date, ctx.calendar)) }
                        td { (txn.description) }
                        td { (txn.category) }
                        td { (txn.transaction_type.to_string()) }
                        td class="amount" { (txn.amount.format_with_symbol(&ctx.currency_symbol)) }
                    }
                }
            }
        }
    };

    let markup = document(
        "Transaction Report",
        None,
        ctx,
        "Total Transactions",
        transactions.len(),
        table,
    );

    tracing::debug!(rows = transactions.len(), "rendered transactions html");
    ExportOutput::Document(markup.into_string())
}

/// Budget statuses as a printable report, or [`ExportOutput::Empty`] for no input
pub fn budgets_html(budgets: &[BudgetStatus], ctx: &ExportContext) -> ExportOutput {
    if budgets.is_empty() {
        return ExportOutput::Empty(ExportKind::Budgets);
    }

    let symbol = ctx.currency_symbol.as_str();
    let table = html! {
        table
        {
            thead
            {
                tr
                {
                    th { "Category" } th { "Budget Limit" } th { "Spent" }
                    th { "Remaining" } th { "Used %" } th { "Status" }
                }
            }
            tbody
            {
                @for budget in budgets {
                    tr
                    {
                        td { (budget.category) }
                        td class="amount" { (budget.budget_limit.format_with_symbol(symbol)) }
                        td class="amount" { (budget.spent.format_with_symbol(symbol)) }
                        td class="amount" { (budget.remaining.format_with_symbol(symbol)) }
                        td class="centered" { (format_percentage(budget.percentage_used)) }
                        td class={ "centered status " (budget.status.css_class()) } { (budget.status.as_str()) }
                    }
                }
            }
        }
    };

    let markup = document(
        "Budget Report",
        Some(STATUS_STYLE),
        ctx,
        "Total Budgets",
        budgets.len(),
        table,
    );

    tracing::debug!(rows = budgets.len(), "rendered budgets html");
    ExportOutput::Document(markup.into_string())
}
