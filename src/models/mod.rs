//! Core data models for finsight
//!
//! Records as the finance API returns them (transactions, budget statuses,
//! category breakdowns) plus the money and calendar types they are built on.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{BudgetHealth, BudgetStatus};
pub use category::CategoryBreakdown;
pub use ids::{TransactionId, UserId};
pub use money::{format_decimal, Money};
pub use period::{CalendarReference, MonthKey};
pub use transaction::{RecurringPattern, Transaction, TransactionType};
