//! Budget progress calculator
//!
//! Measures spending against a [`Budget`] over the window the budget covers on
//! the evaluation day: the current calendar month for monthly budgets, the
//! current calendar year for yearly ones.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Budget, BudgetId, DateRange, Money, Transaction, TransactionType};

/// Progress of one budget in its current window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub budget_id: BudgetId,
    pub window: DateRange,
    /// Sum of matching expenses in the window
    pub spent: Money,
    /// `max(0, amount - spent)`
    pub remaining: Money,
    /// Progress percentage, clamped to 100
    pub percentage: f64,
    /// Unclamped `spent / amount * 100`
    pub raw_percentage: f64,
}

impl BudgetProgress {
    /// Whether spending went past the ceiling
    pub fn is_over_budget(&self) -> bool {
        self.raw_percentage > 100.0
    }

    /// How far past the ceiling spending went (zero when within budget)
    pub fn overspent(&self, budget: &Budget) -> Money {
        (self.spent - budget.amount).non_negative()
    }
}

/// Whether a transaction counts against a budget within a window
fn counts_against(budget: &Budget, window: DateRange, txn: &Transaction) -> bool {
    txn.kind == TransactionType::Expense
        && window.contains(txn.date)
        && txn.category_id == Some(budget.category_id)
        && budget
            .subcategory_id
            .map_or(true, |sub| txn.subcategory_id == Some(sub))
}

/// Compute a budget's progress as of `today`
pub fn budget_progress(
    budget: &Budget,
    transactions: &[Transaction],
    today: NaiveDate,
) -> BudgetProgress {
    let window = budget.window(today);

    let spent: Money = transactions
        .iter()
        .filter(|t| counts_against(budget, window, t))
        .map(|t| t.amount)
        .sum();

    let remaining = (budget.amount - spent).non_negative();

    let raw_percentage = if budget.amount.is_positive() {
        (spent.cents() as f64 * 100.0) / budget.amount.cents() as f64
    } else {
        0.0
    };

    BudgetProgress {
        budget_id: budget.id,
        window,
        spent,
        remaining,
        percentage: raw_percentage.min(100.0),
        raw_percentage,
    }
}

/// Progress for every budget, keyed by budget id
pub fn budget_progress_all(
    budgets: &[Budget],
    transactions: &[Transaction],
    today: NaiveDate,
) -> HashMap<BudgetId, BudgetProgress> {
    budgets
        .iter()
        .map(|b| (b.id, budget_progress(b, transactions, today)))
        .collect()
}
