//! The record store contract and an in-memory snapshot

use serde::{Deserialize, Serialize};

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Account, Budget, Category, CategoryId, Goal, Transaction};

/// Source of the records the engine computes over.
///
/// Implementations hand back lists already scoped to one user.
pub trait RecordStore {
    fn transactions(&self) -> FinsightResult<Vec<Transaction>>;
    fn accounts(&self) -> FinsightResult<Vec<Account>>;
    fn categories(&self) -> FinsightResult<Vec<Category>>;
    fn budgets(&self) -> FinsightResult<Vec<Budget>>;
    fn goals(&self) -> FinsightResult<Vec<Goal>>;

    /// Load every list at once
    fn snapshot(&self) -> FinsightResult<Records> {
        Ok(Records {
            transactions: self.transactions()?,
            accounts: self.accounts()?,
            categories: self.categories()?,
            budgets: self.budgets()?,
            goals: self.goals()?,
        })
    }
}

/// All records of one user, loaded in memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.accounts.is_empty()
            && self.categories.is_empty()
            && self.budgets.is_empty()
            && self.goals.is_empty()
    }

    /// Validate every entity; the first failure is reported with the
    /// offending record's id
    pub fn validate(&self) -> FinsightResult<()> {
        fn invalid(
            entity: &str,
            id: impl std::fmt::Display,
            err: impl std::fmt::Display,
        ) -> FinsightError {
            FinsightError::Validation(format!("{} {}: {}", entity, id, err))
        }

        for txn in &self.transactions {
            txn.validate().map_err(|e| invalid("Transaction", txn.id, e))?;
        }
        for account in &self.accounts {
            account.validate().map_err(|e| invalid("Account", account.id, e))?;
        }
        for category in &self.categories {
            category.validate().map_err(|e| invalid("Category", category.id, e))?;
        }
        for budget in &self.budgets {
            budget.validate().map_err(|e| invalid("Budget", budget.id, e))?;
        }
        for goal in &self.goals {
            goal.validate().map_err(|e| invalid("Goal", goal.id, e))?;
        }
        Ok(())
    }

    /// Find a category by id or name (case-insensitive)
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        let identifier = identifier.trim();
        let parsed = identifier.parse::<CategoryId>().ok();
        self.categories.iter().find(|c| {
            Some(c.id) == parsed
                || c.id.to_string() == identifier
                || c.name.eq_ignore_ascii_case(identifier)
        })
    }
}

impl RecordStore for Records {
    fn transactions(&self) -> FinsightResult<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn accounts(&self) -> FinsightResult<Vec<Account>> {
        Ok(self.accounts.clone())
    }

    fn categories(&self) -> FinsightResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn budgets(&self) -> FinsightResult<Vec<Budget>> {
        Ok(self.budgets.clone())
    }

    fn goals(&self) -> FinsightResult<Vec<Goal>> {
        Ok(self.goals.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money, TransactionType};
    use chrono::NaiveDate;

    fn sample() -> Records {
        let food = Category::new("Food", TransactionType::Expense);
        let txn = Transaction::expense(
            AccountId::new(),
            Money::from_cents(1250),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .categorized(food.id, None);

        Records {
            transactions: vec![txn],
            budgets: vec![Budget::monthly(food.id, Money::from_cents(50000))],
            categories: vec![food],
            ..Records::default()
        }
    }

    #[test]
    fn test_snapshot_round_trips_through_trait() {
        let records = sample();
        let snapshot = records.snapshot().unwrap();
        assert_eq!(snapshot, records);
        assert!(!snapshot.is_empty());
        assert!(Records::new().is_empty());
    }

    #[test]
    fn test_validate_reports_offending_record() {
        let mut records = sample();
        assert!(records.validate().is_ok());

        records.goals.push(Goal::new("Nothing", Money::zero()));
        let err = records.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Goal gol-"));
    }

    #[test]
    fn test_find_category_by_name_or_id() {
        let records = sample();
        let food = &records.categories[0];
        assert_eq!(records.find_category("food").map(|c| c.id), Some(food.id));
        assert_eq!(records.find_category(&food.id.to_string()).map(|c| c.id), Some(food.id));
        assert!(records.find_category("Rent").is_none());
    }
}
