//! Budget status model
//!
//! A budget's standing for one category as computed by the API. Nothing in
//! this crate reclassifies `status`; it is displayed as given.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// API classification of how a budget is tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetHealth {
    /// Spending at or below 80% of the limit
    OnTrack,
    /// Spending between 80% and 100% of the limit
    Warning,
    /// Spending above the limit
    Exceeded,
}

impl BudgetHealth {
    /// The raw API token (`on-track`, `warning`, `exceeded`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTrack => "on-track",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }

    /// CSS class used by the print document
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::OnTrack => "status-on-track",
            Self::Warning => "status-warning",
            Self::Exceeded => "status-exceeded",
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spending against a category budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    /// Category name, unique within a result set
    pub category: String,

    pub budget_limit: Money,

    pub spent: Money,

    /// `budget_limit - spent`; negative once the budget is blown
    pub remaining: Money,

    /// `spent / budget_limit * 100`; may exceed 100
    pub percentage_used: f64,

    pub status: BudgetHealth,
}

impl BudgetStatus {
    /// Build a status with `remaining` and `percentage_used` derived from the
    /// limit and spending
    pub fn new(
        category: impl Into<String>,
        budget_limit: Money,
        spent: Money,
        status: BudgetHealth,
    ) -> Self {
        let percentage_used = if budget_limit.is_zero() {
            0.0
        } else {
            spent.as_f64() / budget_limit.as_f64() * 100.0
        };

        Self {
            category: category.into(),
            budget_limit,
            spent,
            remaining: budget_limit - spent,
            percentage_used,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "category": "Food",
            "budgetLimit": 500.5,
            "spent": 300.25,
            "remaining": 200.25,
            "percentageUsed": 60,
            "status": "on-track"
        }"#;

        let budget: BudgetStatus = serde_json::from_str(json).unwrap();
        assert_eq!(budget.budget_limit, Money::from_cents(50050));
        assert_eq!(budget.spent, Money::from_cents(30025));
        assert_eq!(budget.percentage_used, 60.0);
        assert_eq!(budget.status, BudgetHealth::OnTrack);
    }

    #[test]
    fn test_new_derives_remaining_and_percentage() {
        let budget = BudgetStatus::new(
            "Dining",
            Money::from_cents(20000),
            Money::from_cents(25000),
            BudgetHealth::Exceeded,
        );
        assert_eq!(budget.remaining, Money::from_cents(-5000));
        assert_eq!(budget.percentage_used, 125.0);
    }

    #[test]
    fn test_health_tokens() {
        assert_eq!(BudgetHealth::OnTrack.to_string(), "on-track");
        assert_eq!(
            serde_json::to_string(&BudgetHealth::Exceeded).unwrap(),
            "\"exceeded\""
        );
        assert_eq!(BudgetHealth::Warning.css_class(), "status-warning");
    }
}
