//! Transaction model
//!
//! Mirrors the transaction records returned by the finance API. Records are
//! read-only here: the API owns and mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TransactionId, UserId};
use super::money::Money;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// How often a recurring transaction repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringPattern {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for RecurringPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A financial transaction as stored by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: TransactionId,

    #[serde(default)]
    pub user_id: UserId,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Non-negative amount; the direction comes from `transaction_type`
    pub amount: Money,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub description: String,

    /// Date exactly as stored by the API (`YYYY-MM-DD` or a timestamp)
    pub date: String,

    #[serde(default)]
    pub is_recurring: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_pattern: Option<RecurringPattern>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_recurrence_date: Option<String>,

    #[serde(default)]
    pub created_at: String,
}

impl Transaction {
    /// Create a one-off transaction
    pub fn new(
        id: impl Into<TransactionId>,
        transaction_type: TransactionType,
        amount: Money,
        date: impl Into<String>,
    ) -> Self {
        let date = date.into();
        Self {
            id: id.into(),
            user_id: UserId::default(),
            transaction_type,
            amount,
            category: String::new(),
            description: String::new(),
            created_at: date.clone(),
            date,
            is_recurring: false,
            recurring_pattern: None,
            next_recurrence_date: None,
        }
    }

    /// Create an income transaction
    pub fn income(id: impl Into<TransactionId>, amount: Money, date: impl Into<String>) -> Self {
        Self::new(id, TransactionType::Income, amount, date)
    }

    /// Create an expense transaction
    pub fn expense(id: impl Into<TransactionId>, amount: Money, date: impl Into<String>) -> Self {
        Self::new(id, TransactionType::Expense, amount, date)
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark as recurring with the given pattern
    pub fn recurring(mut self, pattern: RecurringPattern) -> Self {
        self.is_recurring = true;
        self.recurring_pattern = Some(pattern);
        self
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type.is_income()
    }
}
