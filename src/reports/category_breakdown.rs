//! Category Breakdown Report
//!
//! Horizontal bars for per-category spending, each scaled against the
//! largest category.

use crate::display::report::{format_bar, left_align, right_align, separator};
use crate::models::{format_decimal, CategoryBreakdown, Money};

/// One category's bar
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub category: String,
    pub amount: Money,
    /// Bar width as a percentage of the widest bar, 0-100
    pub width: f64,
    pub percentage: f64,
    pub transaction_count: u32,
}

impl CategoryBar {
    /// Amount label, e.g. "$245.50"
    pub fn amount_label(&self, symbol: &str) -> String {
        self.amount.format_with_symbol(symbol)
    }

    /// Share label, e.g. "41.2%"
    pub fn percentage_label(&self) -> String {
        format!("{}%", format_decimal(self.percentage, 1))
    }

    /// Count label, e.g. "7 txns"
    pub fn count_label(&self) -> String {
        format!("{} txns", self.transaction_count)
    }
}

/// Category breakdown chart
#[derive(Debug, Clone, Default)]
pub struct CategoryBreakdownReport {
    pub bars: Vec<CategoryBar>,
}

impl CategoryBreakdownReport {
    /// Scale each category against the largest amount, keeping input order
    pub fn generate(rows: &[CategoryBreakdown]) -> Self {
        let max = rows.iter().map(|r| r.amount).max().unwrap_or_default();

        let bars = rows
            .iter()
            .map(|row| CategoryBar {
                category: row.category.clone(),
                amount: row.amount,
                width: if max.is_positive() {
                    row.amount.as_f64() / max.as_f64() * 100.0
                } else {
                    0.0
                },
                percentage: row.percentage,
                transaction_count: row.transaction_count,
            })
            .collect();

        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return "No category data available\n".to_string();
        }

        let mut output = String::from("Category Breakdown\n");
        output.push_str(&separator(72));
        output.push('\n');

        for bar in &self.bars {
            output.push_str(&format!(
                "{} {} {} {} {}\n",
                left_align(&bar.category, 20),
                right_align(&bar.amount_label(symbol), 12),
                format_bar(bar.width, 100.0, 20),
                right_align(&bar.percentage_label(), 7),
                bar.count_label()
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, cents: i64, percentage: f64, count: u32) -> CategoryBreakdown {
        CategoryBreakdown {
            category: category.to_string(),
            amount: Money::from_cents(cents),
            percentage,
            transaction_count: count,
        }
    }

    #[test]
    fn test_widths_scale_to_largest() {
        let report = CategoryBreakdownReport::generate(&[
            row("Food", 40000, 50.0, 8),
            row("Fun", 10000, 12.5, 2),
        ]);

        assert_eq!(report.bars[0].width, 100.0);
        assert_eq!(report.bars[1].width, 25.0);
        assert_eq!(report.bars[1].percentage_label(), "12.5%");
        assert_eq!(report.bars[1].count_label(), "2 txns");
        assert_eq!(report.bars[0].amount_label("$"), "$400.00");
    }

    #[test]
    fn test_percentage_label_rounds_ties_up() {
        let report = CategoryBreakdownReport::generate(&[row("Food", 100, 22.75, 1)]);
        assert_eq!(report.bars[0].percentage_label(), "22.8%");
    }

    #[test]
    fn test_empty_and_zero_inputs() {
        let empty = CategoryBreakdownReport::generate(&[]);
        assert!(empty.is_empty());
        assert!(empty.format_terminal("$").contains("No category data available"));

        let zeros = CategoryBreakdownReport::generate(&[row("Food", 0, 0.0, 0)]);
        assert_eq!(zeros.bars[0].width, 0.0);
    }
}
