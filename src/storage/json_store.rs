//! JSON file record store
//!
//! One file per entity under the data directory, each holding an object with
//! a single list (`{"transactions": [...]}`). Missing files read as empty.

use serde::{Deserialize, Serialize};

use crate::config::paths::FinsightPaths;
use crate::error::FinsightResult;
use crate::models::{Account, Budget, Category, Goal, Transaction};

use super::file_io::{read_json, write_json_atomic};
use super::records::{RecordStore, Records};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AccountData {
    #[serde(default)]
    accounts: Vec<Account>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct CategoryData {
    #[serde(default)]
    pub(crate) categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GoalData {
    #[serde(default)]
    goals: Vec<Goal>,
}

/// Record store backed by JSON files in the data directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    paths: FinsightPaths,
}

impl JsonStore {
    pub fn new(paths: FinsightPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &FinsightPaths {
        &self.paths
    }

    /// Write every list of a snapshot to its file
    pub fn save(&self, records: &Records) -> FinsightResult<()> {
        self.paths.ensure_directories()?;

        write_json_atomic(
            self.paths.transactions_file(),
            &TransactionData {
                transactions: records.transactions.clone(),
            },
        )?;
        write_json_atomic(
            self.paths.accounts_file(),
            &AccountData {
                accounts: records.accounts.clone(),
            },
        )?;
        write_json_atomic(
            self.paths.categories_file(),
            &CategoryData {
                categories: records.categories.clone(),
            },
        )?;
        write_json_atomic(
            self.paths.budgets_file(),
            &BudgetData {
                budgets: records.budgets.clone(),
            },
        )?;
        write_json_atomic(
            self.paths.goals_file(),
            &GoalData {
                goals: records.goals.clone(),
            },
        )?;

        tracing::info!(
            dir = %self.paths.data_dir().display(),
            transactions = records.transactions.len(),
            "Saved records"
        );
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn transactions(&self) -> FinsightResult<Vec<Transaction>> {
        let data: TransactionData = read_json(self.paths.transactions_file())?;
        Ok(data.transactions)
    }

    fn accounts(&self) -> FinsightResult<Vec<Account>> {
        let data: AccountData = read_json(self.paths.accounts_file())?;
        Ok(data.accounts)
    }

    fn categories(&self) -> FinsightResult<Vec<Category>> {
        let data: CategoryData = read_json(self.paths.categories_file())?;
        Ok(data.categories)
    }

    fn budgets(&self) -> FinsightResult<Vec<Budget>> {
        let data: BudgetData = read_json(self.paths.budgets_file())?;
        Ok(data.budgets)
    }

    fn goals(&self) -> FinsightResult<Vec<Goal>> {
        let data: GoalData = read_json(self.paths.goals_file())?;
        Ok(data.goals)
    }

    fn snapshot(&self) -> FinsightResult<Records> {
        let records = Records {
            transactions: self.transactions()?,
            accounts: self.accounts()?,
            categories: self.categories()?,
            budgets: self.budgets()?,
            goals: self.goals()?,
        };
        tracing::debug!(
            transactions = records.transactions.len(),
            accounts = records.accounts.len(),
            categories = records.categories.len(),
            budgets = records.budgets.len(),
            goals = records.goals.len(),
            "Loaded records"
        );
        Ok(records)
    }
}
