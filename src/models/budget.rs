//! Budget model
//!
//! A budget is a perpetual spending ceiling for a category (optionally
//! narrowed to one subcategory). It has no start date: the evaluation window
//! is always the current month or year relative to the date it is evaluated on.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId, SubcategoryId};
use super::money::Money;
use super::period::{DateRange, Month};

/// Recurrence of a budget ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    /// The window this period covers on a given day: the calendar month or
    /// the calendar year containing `today`
    pub fn window(&self, today: NaiveDate) -> DateRange {
        match self {
            Self::Monthly => Month::of(today).range(),
            Self::Yearly => DateRange::year(today.year()),
        }
    }

    /// Parse a period from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" => Some(Self::Monthly),
            "yearly" | "year" | "annual" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A recurring spending ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category_id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<SubcategoryId>,
    /// Ceiling for one period
    pub amount: Money,
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl Budget {
    /// Create a monthly budget for a category
    pub fn monthly(category_id: CategoryId, amount: Money) -> Self {
        Self::new(category_id, amount, BudgetPeriod::Monthly)
    }

    /// Create a yearly budget for a category
    pub fn yearly(category_id: CategoryId, amount: Money) -> Self {
        Self::new(category_id, amount, BudgetPeriod::Yearly)
    }

    /// Create a budget
    pub fn new(category_id: CategoryId, amount: Money, period: BudgetPeriod) -> Self {
        Self {
            id: BudgetId::new(),
            category_id,
            subcategory_id: None,
            amount,
            period,
        }
    }

    /// Narrow the budget to a subcategory
    pub fn for_subcategory(mut self, subcategory_id: SubcategoryId) -> Self {
        self.subcategory_id = Some(subcategory_id);
        self
    }

    /// Evaluation window on a given day
    pub fn window(&self, today: NaiveDate) -> DateRange {
        self.period.window(today)
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetValidationError {
    #[error("Budget amount must be positive, got {0}")]
    NonPositiveAmount(Money),
}
