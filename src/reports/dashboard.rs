//! Dashboard summary
//!
//! Everything here is composed from the aggregation functions; the only
//! logic of its own is choosing which month and which day count to use.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::config::{AverageDailyBasis, Settings};
use crate::models::{
    last_n_months, Category, CategoryId, Money, Month, Transaction, TransactionType,
};
use crate::storage::Records;

use super::aggregation::{
    active_balance, group_by_category, in_range, money_change, money_percentage, monthly_totals,
    savings_rate, smallest_transaction, sort_by_total_desc, sum_by_type, top_transactions,
    MonthlyTotals, PeriodChange,
};

/// Knobs for the dashboard, usually taken from [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    pub top_n: usize,
    pub trend_months: usize,
    pub average_daily_basis: AverageDailyBasis,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DashboardOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            top_n: settings.top_transactions,
            trend_months: settings.trend_months,
            average_daily_basis: settings.average_daily_basis,
        }
    }
}

/// One slice of a category breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// `None` for the uncategorized bucket
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub color: Option<String>,
    pub total: Money,
    pub count: usize,
    /// Share of the type's total, not clamped
    pub percentage: f64,
}

/// Totals of one type by category, largest first, with each category's share
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
    kind: TransactionType,
) -> Vec<CategoryShare> {
    let matching: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.kind == kind)
        .cloned()
        .collect();
    let grand_total = sum_by_type(&matching, kind);

    let mut groups = group_by_category(&matching, categories);
    sort_by_total_desc(&mut groups);

    groups
        .into_iter()
        .map(|group| CategoryShare {
            category_id: group.category_id(),
            name: group.name().to_string(),
            color: group.category.as_ref().map(|c| c.color.clone()),
            total: group.total,
            count: group.count,
            percentage: money_percentage(group.total, grand_total),
        })
        .collect()
}

/// Read-only summary of one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub month: Month,
    pub previous_month: Month,
    /// Balance over active non-credit accounts
    pub total_balance: Money,
    pub income: Money,
    pub expense: Money,
    pub previous_income: Money,
    pub previous_expense: Money,
    pub income_change: PeriodChange,
    pub expense_change: PeriodChange,
    pub savings_rate: f64,
    pub expense_breakdown: Vec<CategoryShare>,
    pub top_income: Vec<Transaction>,
    pub top_expenses: Vec<Transaction>,
    pub biggest_expense: Option<Transaction>,
    pub smallest_expense: Option<Transaction>,
    /// Days the average daily expense is spread over
    pub expense_days: u32,
    pub average_daily_expense: Money,
    pub active_accounts: usize,
    pub goals: usize,
    pub goals_completed: usize,
    /// Income and expense per month, oldest first, ending with `month`
    pub trend: Vec<MonthlyTotals>,
}

impl DashboardSummary {
    /// Summary of the month containing `today`
    pub fn generate(records: &Records, today: NaiveDate, options: DashboardOptions) -> Self {
        Self::generate_for_month(records, Month::of(today), today, options)
    }

    /// Summary of any month; `today` decides how many days of it have elapsed
    pub fn generate_for_month(
        records: &Records,
        month: Month,
        today: NaiveDate,
        options: DashboardOptions,
    ) -> Self {
        let previous_month = month.prev();
        let current: Vec<Transaction> =
            in_range(&records.transactions, month.range()).cloned().collect();
        let previous: Vec<Transaction> =
            in_range(&records.transactions, previous_month.range()).cloned().collect();

        let income = sum_by_type(&current, TransactionType::Income);
        let expense = sum_by_type(&current, TransactionType::Expense);
        let previous_income = sum_by_type(&previous, TransactionType::Income);
        let previous_expense = sum_by_type(&previous, TransactionType::Expense);

        let expense_days = expense_days(month, today, options.average_daily_basis);
        let average_daily_expense =
            Money::from_decimal(expense.as_decimal() / f64::from(expense_days));

        let biggest_expense = top_transactions(&current, TransactionType::Expense, 1)
            .first()
            .map(|t| (*t).clone());

        let trend_months = last_n_months(options.trend_months, month.first_day());

        Self {
            month,
            previous_month,
            total_balance: active_balance(&records.accounts),
            income,
            expense,
            previous_income,
            previous_expense,
            income_change: money_change(income, previous_income),
            expense_change: money_change(expense, previous_expense),
            savings_rate: savings_rate(income, expense),
            expense_breakdown: category_breakdown(
                &current,
                &records.categories,
                TransactionType::Expense,
            ),
            top_income: owned(top_transactions(&current, TransactionType::Income, options.top_n)),
            top_expenses: owned(top_transactions(
                &current,
                TransactionType::Expense,
                options.top_n,
            )),
            biggest_expense,
            smallest_expense: smallest_transaction(&current, TransactionType::Expense).cloned(),
            expense_days,
            average_daily_expense,
            active_accounts: records.accounts.iter().filter(|a| a.is_active).count(),
            goals: records.goals.len(),
            goals_completed: records.goals.iter().filter(|g| g.is_complete()).count(),
            trend: monthly_totals(&records.transactions, &trend_months),
        }
    }

    /// Income minus expense for the month
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Days elapsed when `month` is the current month (and the basis asks for
/// it), otherwise the length of the month
fn expense_days(month: Month, today: NaiveDate, basis: AverageDailyBasis) -> u32 {
    match basis {
        AverageDailyBasis::Elapsed if month.contains(today) => today.day(),
        _ => month.days(),
    }
}

fn owned(transactions: Vec<&Transaction>) -> Vec<Transaction> {
    transactions.into_iter().cloned().collect()
}
