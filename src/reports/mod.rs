//! Reports module for finsight
//!
//! Chart-ready views derived from API records: monthly income/expense
//! trends, category breakdown, income vs expense split, and budget
//! comparison. Every report is a pure function of its input.

pub mod budget_comparison;
pub mod category_breakdown;
pub mod monthly_trends;
pub mod type_breakdown;

pub use budget_comparison::{BudgetBar, BudgetComparisonReport};
pub use category_breakdown::{CategoryBar, CategoryBreakdownReport};
pub use monthly_trends::{
    aggregate_by_month, ChartScale, MonthSlot, MonthlyBar, MonthlyBucket, MonthlyTrendsReport,
};
pub use type_breakdown::{TransactionSummary, TypeBreakdownReport, TypeShares};
