//! Monthly Trends Report
//!
//! Groups transactions by calendar month, summing income and expense
//! separately, and scales the result for a bar chart.

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::display::report::format_bar;
use crate::models::{format_decimal, CalendarReference, Money, MonthKey, Transaction};

/// Label used for transactions whose date could not be read
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Headroom added above the largest value on a chart axis
pub const CHART_PADDING: f64 = 0.1;

/// Where a transaction lands on the month axis
///
/// Unreadable dates all share one slot, which sorts after every real month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MonthSlot {
    Month(MonthKey),
    Invalid,
}

impl MonthSlot {
    fn label(&self) -> String {
        match self {
            Self::Month(key) => key.label(),
            Self::Invalid => INVALID_DATE_LABEL.to_string(),
        }
    }
}

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// Sort key; `Invalid` for unreadable dates
    pub slot: MonthSlot,
    /// Display label, e.g. "Jan 2024"
    pub label: String,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyBucket {
    fn empty(slot: MonthSlot) -> Self {
        Self {
            label: slot.label(),
            slot,
            income: Money::zero(),
            expense: Money::zero(),
        }
    }

    /// The calendar month, if the dates in this bucket were readable
    pub fn month_key(&self) -> Option<MonthKey> {
        match self.slot {
            MonthSlot::Month(key) => Some(key),
            MonthSlot::Invalid => None,
        }
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Group transactions by calendar month
///
/// Produces one bucket per distinct month in the input, ordered oldest
/// first regardless of input order. Empty input gives an empty vector.
pub fn aggregate_by_month(
    transactions: &[Transaction],
    calendar: CalendarReference,
) -> Vec<MonthlyBucket> {
    let mut buckets: HashMap<MonthSlot, MonthlyBucket> = HashMap::new();

    for txn in transactions {
        let slot = match calendar.calendar_date(&txn.date) {
            Some(date) => MonthSlot::Month(MonthKey::from_date(date)),
            None => {
                tracing::warn!(id = %txn.id, date = %txn.date, "unreadable transaction date");
                MonthSlot::Invalid
            }
        };

        let bucket = buckets
            .entry(slot)
            .or_insert_with(|| MonthlyBucket::empty(slot));

        if txn.is_income() {
            bucket.income += txn.amount;
        } else {
            bucket.expense += txn.amount;
        }
    }

    let mut sorted: Vec<MonthlyBucket> = buckets.into_values().collect();
    sorted.sort_by_key(|bucket| bucket.slot);

    tracing::debug!(
        transactions = transactions.len(),
        months = sorted.len(),
        "aggregated monthly trends"
    );

    sorted
}

/// Vertical scale for a bar chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    ceiling: f64,
}

impl ChartScale {
    /// Scale whose ceiling is the largest value plus 10% padding
    pub fn from_values(values: impl IntoIterator<Item = Money>) -> Self {
        let max = values.into_iter().max().unwrap_or_default();
        Self {
            ceiling: max.as_f64() * (1.0 + CHART_PADDING),
        }
    }

    /// Scale covering every income and expense value in the buckets
    pub fn from_buckets(buckets: &[MonthlyBucket]) -> Self {
        Self::from_values(buckets.iter().flat_map(|b| [b.income, b.expense]))
    }

    /// The axis maximum
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Bar height as a percentage of the axis, 0-100
    ///
    /// An all-zero series has a zero ceiling; every height is then 0.
    pub fn height(&self, value: Money) -> f64 {
        if self.ceiling <= 0.0 {
            return 0.0;
        }
        value.as_f64() / self.ceiling * 100.0
    }

    /// Axis labels from top to bottom: ceiling, half, zero
    pub fn axis_labels(&self, symbol: &str) -> [String; 3] {
        [
            format!("{}{}", symbol, format_decimal(self.ceiling, 0)),
            format!("{}{}", symbol, format_decimal(self.ceiling / 2.0, 0)),
            format!("{}0", symbol),
        ]
    }
}

/// One month's bars, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBar {
    pub label: String,
    pub income: Money,
    pub expense: Money,
    pub income_height: f64,
    pub expense_height: f64,
}

/// Monthly income/expense chart
#[derive(Debug, Clone)]
pub struct MonthlyTrendsReport {
    pub buckets: Vec<MonthlyBucket>,
    pub scale: ChartScale,
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Income bar")]
    income_bar: String,
    #[tabled(rename = "Expense bar")]
    expense_bar: String,
}

impl MonthlyTrendsReport {
    /// Aggregate transactions and compute the chart scale
    pub fn generate(transactions: &[Transaction], calendar: CalendarReference) -> Self {
        let buckets = aggregate_by_month(transactions, calendar);
        let scale = ChartScale::from_buckets(&buckets);
        Self { buckets, scale }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bars scaled against the shared axis
    pub fn bars(&self) -> Vec<MonthlyBar> {
        self.buckets
            .iter()
            .map(|bucket| MonthlyBar {
                label: bucket.label.clone(),
                income: bucket.income,
                expense: bucket.expense,
                income_height: self.scale.height(bucket.income),
                expense_height: self.scale.height(bucket.expense),
            })
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return "No transaction data available\n".to_string();
        }

        const BAR_WIDTH: usize = 20;
        let rows: Vec<TrendRow> = self
            .bars()
            .into_iter()
            .zip(&self.buckets)
            .map(|(bar, bucket)| TrendRow {
                month: bar.label,
                income: bar.income.format_with_symbol(symbol),
                expense: bar.expense.format_with_symbol(symbol),
                net: bucket.net().format_with_symbol(symbol),
                income_bar: format_bar(bar.income_height, 100.0, BAR_WIDTH),
                expense_bar: format_bar(bar.expense_height, 100.0, BAR_WIDTH),
            })
            .collect();

        let [top, middle, bottom] = self.scale.axis_labels(symbol);
        let mut output = String::from("Monthly Trends\n");
        output.push_str(&format!("Axis: {} / {} / {}\n", top, middle, bottom));
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
        output
    }
}
