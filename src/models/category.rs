//! Category spending summary
//!
//! Per-category totals as returned by the API's breakdown endpoint. This is
//! a separate type from [`BudgetStatus`](super::BudgetStatus) even though both
//! carry a category name.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Spending summary for a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: Money,
    /// Share of the period's total, 0-100
    pub percentage: f64,
    pub transaction_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{"category":"Food","amount":245.5,"percentage":41.2,"transactionCount":7}"#;
        let row: CategoryBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(row.amount, Money::from_cents(24550));
        assert_eq!(row.transaction_count, 7);
    }
}
