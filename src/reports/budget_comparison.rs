//! Budget Comparison Report
//!
//! Side-by-side limit and spent bars per category, highest spenders first.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::monthly_trends::ChartScale;
use crate::display::report::format_bar;
use crate::models::{BudgetHealth, BudgetStatus, Money};

/// One budget's pair of bars
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetBar {
    pub category: String,
    pub budget_limit: Money,
    pub spent: Money,
    pub status: BudgetHealth,
    pub limit_height: f64,
    pub spent_height: f64,
    /// `spent / limit` as a whole percentage; 0 when the limit is zero
    pub used_percent: i64,
}

/// Budget comparison chart
#[derive(Debug, Clone)]
pub struct BudgetComparisonReport {
    pub bars: Vec<BudgetBar>,
    pub scale: ChartScale,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Spent bar")]
    bar: String,
}

impl BudgetComparisonReport {
    /// Sort by spending and scale against the largest limit plus padding
    pub fn generate(budgets: &[BudgetStatus]) -> Self {
        let mut sorted: Vec<&BudgetStatus> = budgets.iter().collect();
        sorted.sort_by(|a, b| b.spent.cmp(&a.spent));

        let scale = ChartScale::from_values(sorted.iter().map(|b| b.budget_limit));

        let bars = sorted
            .into_iter()
            .map(|budget| BudgetBar {
                category: budget.category.clone(),
                budget_limit: budget.budget_limit,
                spent: budget.spent,
                status: budget.status,
                limit_height: scale.height(budget.budget_limit),
                spent_height: scale.height(budget.spent),
                used_percent: if budget.budget_limit.is_positive() {
                    (budget.spent.as_f64() / budget.budget_limit.as_f64() * 100.0).round() as i64
                } else {
                    0
                },
            })
            .collect();

        Self { bars, scale }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return "No budget data available\n".to_string();
        }

        let rows: Vec<ComparisonRow> = self
            .bars
            .iter()
            .map(|bar| ComparisonRow {
                category: bar.category.clone(),
                limit: bar.budget_limit.format_with_symbol(symbol),
                spent: bar.spent.format_with_symbol(symbol),
                used: format!("{}%", bar.used_percent),
                status: bar.status.to_string(),
                bar: format_bar(bar.spent_height, 100.0, 20),
            })
            .collect();

        let mut output = String::from("Budget vs Actual\n");
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
        output.push_str("on-track <= 80%, warning 80-100%, exceeded > 100%\n");
        output
    }
}
