//! JSON Export functionality
//!
//! Exports the dashboard report and the full record set with schema
//! versioning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Account, Budget, Category, Goal, Transaction};
use crate::reports::{
    budget_progress, goal_progress, BudgetProgress, DashboardOptions, DashboardSummary,
    GoalProgress,
};
use crate::storage::Records;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard report with budget and goal progress
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    /// Reference date the report was computed for
    pub as_of: NaiveDate,
    pub currency: String,
    pub dashboard: DashboardSummary,
    pub budgets: Vec<BudgetProgress>,
    pub goals: Vec<GoalProgress>,
}

impl ReportExport {
    pub fn generate(
        records: &Records,
        today: NaiveDate,
        options: DashboardOptions,
        currency: &str,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            as_of: today,
            currency: currency.to_string(),
            dashboard: DashboardSummary::generate(records, today, options),
            budgets: records
                .budgets
                .iter()
                .map(|b| budget_progress(b, &records.transactions, today))
                .collect(),
            goals: records.goals.iter().map(|g| goal_progress(g, today)).collect(),
        }
    }
}

/// Full record set export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub account_count: usize,
    pub transaction_count: usize,
    pub category_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,
    pub earliest_transaction: Option<NaiveDate>,
    pub latest_transaction: Option<NaiveDate>,
}

impl RecordsExport {
    pub fn from_records(records: &Records) -> Self {
        let metadata = ExportMetadata {
            account_count: records.accounts.len(),
            transaction_count: records.transactions.len(),
            category_count: records.categories.len(),
            budget_count: records.budgets.len(),
            goal_count: records.goals.len(),
            earliest_transaction: records.transactions.iter().map(|t| t.date).min(),
            latest_transaction: records.transactions.iter().map(|t| t.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            accounts: records.accounts.clone(),
            categories: records.categories.clone(),
            transactions: records.transactions.clone(),
            budgets: records.budgets.clone(),
            goals: records.goals.clone(),
            metadata,
        }
    }

    /// Back to a snapshot, validating every entity
    pub fn into_records(self) -> FinsightResult<Records> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(FinsightError::Parse(format!(
                "Unsupported export schema version: {}",
                self.schema_version
            )));
        }
        let records = Records {
            transactions: self.transactions,
            accounts: self.accounts,
            categories: self.categories,
            budgets: self.budgets,
            goals: self.goals,
        };
        records.validate()?;
        Ok(records)
    }
}

/// Write the report as pretty JSON
pub fn export_report_json<W: Write>(report: &ReportExport, writer: &mut W) -> FinsightResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write every record as pretty JSON
pub fn export_records_json<W: Write>(records: &Records, writer: &mut W) -> FinsightResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &RecordsExport::from_records(records))?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money, TransactionType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Records {
        let food = Category::new("Food", TransactionType::Expense);
        Records {
            transactions: vec![
                Transaction::expense(AccountId::new(), Money::from_cents(3000), date(2025, 3, 2))
                    .categorized(food.id, None),
                Transaction::income(AccountId::new(), Money::from_cents(90000), date(2025, 2, 27)),
            ],
            budgets: vec![Budget::monthly(food.id, Money::from_cents(10000))],
            categories: vec![food],
            goals: vec![Goal::new("Bike", Money::from_cents(200000))],
            ..Records::default()
        }
    }

    #[test]
    fn test_report_json_contents() {
        let options = DashboardOptions::default();
        let report = ReportExport::generate(&records(), date(2025, 3, 15), options, "BRL");
        let mut buffer = Vec::new();
        export_report_json(&report, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["as_of"], "2025-03-15");
        assert_eq!(value["dashboard"]["expense"], 3000);
        assert_eq!(value["dashboard"]["income_change"]["kind"], "percent");
        assert_eq!(value["dashboard"]["income_change"]["value"], -100.0);
        assert_eq!(value["budgets"][0]["spent"], 3000);
        assert_eq!(value["budgets"][0]["percentage"], 30.0);
        assert_eq!(value["goals"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_records_export_round_trip() {
        let original = records();
        let mut buffer = Vec::new();
        export_records_json(&original, &mut buffer).unwrap();

        let export: RecordsExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.earliest_transaction, Some(date(2025, 2, 27)));
        assert_eq!(export.into_records().unwrap(), original);
    }

    #[test]
    fn test_rejects_unknown_schema() {
        let mut export = RecordsExport::from_records(&records());
        export.schema_version = "9.9.9".into();
        assert!(matches!(export.into_records(), Err(FinsightError::Parse(_))));
    }
}
