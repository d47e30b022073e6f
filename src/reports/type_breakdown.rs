//! Income vs Expense Report
//!
//! Splits a set of transactions into income and expense totals and their
//! share of the combined volume.

use serde::Serialize;

use crate::models::{format_decimal, Money, Transaction};

/// Income, expense and net totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_income: Money,
    pub total_expense: Money,
    pub net_income: Money,
}

impl TransactionSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Self::default();
        for txn in transactions {
            if txn.is_income() {
                summary.total_income += txn.amount;
            } else {
                summary.total_expense += txn.amount;
            }
        }
        summary.net_income = summary.total_income - summary.total_expense;
        summary
    }
}

/// Income/expense split of a transaction set
#[derive(Debug, Clone, PartialEq)]
pub struct TypeBreakdownReport {
    pub summary: TransactionSummary,
    /// Percentages of `income + expense`; `None` when both are zero
    pub shares: Option<TypeShares>,
}

/// Percentage split, summing to 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeShares {
    pub income: f64,
    pub expense: f64,
}

/// Circumference of an r=40 donut ring
const DONUT_CIRCUMFERENCE: f64 = 251.2;

impl TypeShares {
    /// Stroke dash lengths for a two-segment donut: (income, expense)
    pub fn donut_segments(&self) -> (f64, f64) {
        (
            self.income / 100.0 * DONUT_CIRCUMFERENCE,
            self.expense / 100.0 * DONUT_CIRCUMFERENCE,
        )
    }
}

impl TypeBreakdownReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let summary = TransactionSummary::from_transactions(transactions);
        let total = summary.total_income + summary.total_expense;

        let shares = (!total.is_zero()).then(|| TypeShares {
            income: summary.total_income.as_f64() / total.as_f64() * 100.0,
            expense: summary.total_expense.as_f64() / total.as_f64() * 100.0,
        });

        Self { summary, shares }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let Some(shares) = self.shares else {
            return "No transaction data\n".to_string();
        };

        let mut output = String::from("Income vs Expense\n");
        output.push_str(&format!(
            "Income:  {} ({}%)\n",
            self.summary.total_income.format_with_symbol(symbol),
            format_decimal(shares.income, 1)
        ));
        output.push_str(&format!(
            "Expense: {} ({}%)\n",
            self.summary.total_expense.format_with_symbol(symbol),
            format_decimal(shares.expense, 1)
        ));
        output.push_str(&format!(
            "Net:     {}\n",
            self.summary.net_income.format_with_symbol(symbol)
        ));
        output
    }
}
