//! Aggregation engine
//!
//! Groups and sums transactions by type, category, account and calendar
//! month, and derives the rates shown on the dashboard. Every function here
//! is a pure function of its arguments: no clock reads, no I/O, and empty
//! input produces empty or zeroed output.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{
    Account, AccountId, Category, CategoryId, DateRange, Money, Month, Transaction,
    TransactionType,
};

/// Label used for transactions without a known category
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Total amount of the transactions of one type
pub fn sum_by_type(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Transactions dated inside a range, in input order
pub fn in_range<'a>(
    transactions: &'a [Transaction],
    range: DateRange,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions.iter().filter(move |t| range.contains(t.date))
}

/// Sum of the transactions in one category bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category, or `None` for the uncategorized bucket
    pub category: Option<Category>,
    pub total: Money,
    pub count: usize,
}

impl CategoryTotal {
    /// Category id, `None` for the uncategorized bucket
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|c| c.id)
    }

    /// Display name of the bucket
    pub fn name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }

    /// Whether this is the uncategorized bucket
    pub fn is_uncategorized(&self) -> bool {
        self.category.is_none()
    }
}

/// Group transactions by category.
///
/// Only categories with at least one transaction appear. Transactions with no
/// category, or whose category id is not in `categories`, land in a single
/// uncategorized bucket. Buckets come back in order of first appearance in
/// `transactions`; use [`sort_by_total_desc`] for the usual display order.
pub fn group_by_category(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategoryTotal> {
    let lookup: HashMap<CategoryId, &Category> =
        categories.iter().map(|c| (c.id, c)).collect();

    let mut positions: HashMap<Option<CategoryId>, usize> = HashMap::new();
    let mut groups: Vec<CategoryTotal> = Vec::new();

    for txn in transactions {
        let category = txn.category_id.and_then(|id| lookup.get(&id).copied());
        if category.is_none() && txn.category_id.is_some() {
            tracing::debug!(
                transaction = %txn.id,
                "category reference not found, counting as uncategorized"
            );
        }

        let key = category.map(|c| c.id);
        let index = *positions.entry(key).or_insert_with(|| {
            groups.push(CategoryTotal {
                category: category.cloned(),
                total: Money::zero(),
                count: 0,
            });
            groups.len() - 1
        });

        groups[index].total += txn.amount;
        groups[index].count += 1;
    }

    groups
}

/// Sort groups by total, largest first; ties keep their input order
pub fn sort_by_total_desc(groups: &mut [CategoryTotal]) {
    groups.sort_by(|a, b| b.total.cmp(&a.total));
}

/// `part / total * 100`, or `0` when the total is zero or the inputs are not finite
pub fn percentage_of_total(part: f64, total: f64) -> f64 {
    if total == 0.0 || !part.is_finite() || !total.is_finite() {
        return 0.0;
    }
    (part / total) * 100.0
}

/// [`percentage_of_total`] over exact amounts
pub fn money_percentage(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    percentage_of_total(part.cents() as f64, total.cents() as f64)
}

/// Income and expense summed over one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyTotals {
    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Income/expense totals for each month of an ordered month sequence.
///
/// The output has one entry per input month, in the same order, including
/// months with no transactions.
pub fn monthly_totals(transactions: &[Transaction], months: &[Month]) -> Vec<MonthlyTotals> {
    months
        .iter()
        .map(|month| {
            let range = month.range();
            let mut totals = MonthlyTotals {
                month: *month,
                income: Money::zero(),
                expense: Money::zero(),
            };
            for txn in in_range(transactions, range) {
                match txn.kind {
                    TransactionType::Income => totals.income += txn.amount,
                    TransactionType::Expense => totals.expense += txn.amount,
                }
            }
            totals
        })
        .collect()
}

/// Change of a value relative to the previous period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PeriodChange {
    /// Nothing in the previous period, something now
    New,
    /// Nothing in either period
    Zero,
    /// Signed percentage change
    Percent(f64),
}

impl PeriodChange {
    /// The percentage if there is one (`Zero` reads as 0%, `New` has none)
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::New => None,
            Self::Zero => Some(0.0),
            Self::Percent(p) => Some(*p),
        }
    }

    /// Short label for display ("New", "0.0%", "+12.5%")
    pub fn label(&self) -> String {
        match self {
            Self::New => "New".to_string(),
            Self::Zero => "0.0%".to_string(),
            Self::Percent(p) => format!("{:+.1}%", p),
        }
    }
}

/// Compare a value with the previous period's.
///
/// `New` when the previous value is zero and the current one positive,
/// `Zero` when the previous value is zero and the current one is not
/// positive (or an input is not finite), otherwise
/// `(current - previous) / previous * 100`.
pub fn period_over_period_change(current: f64, previous: f64) -> PeriodChange {
    if !current.is_finite() || !previous.is_finite() {
        return PeriodChange::Zero;
    }
    if previous == 0.0 {
        return if current > 0.0 {
            PeriodChange::New
        } else {
            PeriodChange::Zero
        };
    }
    PeriodChange::Percent(((current - previous) / previous) * 100.0)
}

/// [`period_over_period_change`] over exact amounts
pub fn money_change(current: Money, previous: Money) -> PeriodChange {
    period_over_period_change(current.as_decimal(), previous.as_decimal())
}

/// Share of income not spent, as a percentage; `0` when there is no income
pub fn savings_rate(income: Money, expenses: Money) -> f64 {
    if !income.is_positive() {
        return 0.0;
    }
    ((income - expenses).cents() as f64 / income.cents() as f64) * 100.0
}

/// Balance over every non-credit account, active or not.
///
/// This is the point-in-time balance used for historical views.
pub fn total_balance(accounts: &[Account]) -> Money {
    accounts
        .iter()
        .filter(|a| !a.account_type.is_credit())
        .map(|a| a.balance)
        .sum()
}

/// Balance over active non-credit accounts, as shown on the dashboard
pub fn active_balance(accounts: &[Account]) -> Money {
    accounts
        .iter()
        .filter(|a| a.is_active && !a.account_type.is_credit())
        .map(|a| a.balance)
        .sum()
}

/// Income and expense recorded against one account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountTotals {
    pub account_id: AccountId,
    pub income: Money,
    pub expense: Money,
}

impl AccountTotals {
    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Per-account income/expense totals, in order of first appearance
pub fn sum_by_account(transactions: &[Transaction]) -> Vec<AccountTotals> {
    let mut positions: HashMap<AccountId, usize> = HashMap::new();
    let mut totals: Vec<AccountTotals> = Vec::new();

    for txn in transactions {
        let index = *positions.entry(txn.account_id).or_insert_with(|| {
            totals.push(AccountTotals {
                account_id: txn.account_id,
                income: Money::zero(),
                expense: Money::zero(),
            });
            totals.len() - 1
        });
        match txn.kind {
            TransactionType::Income => totals[index].income += txn.amount,
            TransactionType::Expense => totals[index].expense += txn.amount,
        }
    }

    totals
}

/// The `n` largest transactions of one type, largest first; equal amounts
/// keep their input order
pub fn top_transactions(
    transactions: &[Transaction],
    kind: TransactionType,
    n: usize,
) -> Vec<&Transaction> {
    let mut matching: Vec<&Transaction> = transactions.iter().filter(|t| t.kind == kind).collect();
    matching.sort_by(|a, b| b.amount.cmp(&a.amount));
    matching.truncate(n);
    matching
}

/// The smallest transaction of one type; the first one wins a tie
pub fn smallest_transaction(
    transactions: &[Transaction],
    kind: TransactionType,
) -> Option<&Transaction> {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .fold(None, |best: Option<&Transaction>, t| match best {
            Some(b) if b.amount <= t.amount => Some(b),
            _ => Some(t),
        })
}

/// Mean amount of the transactions of one type; zero when there are none
pub fn average_amount(transactions: &[Transaction], kind: TransactionType) -> Money {
    let count = transactions.iter().filter(|t| t.kind == kind).count();
    if count == 0 {
        return Money::zero();
    }
    Money::from_decimal(sum_by_type(transactions, kind).as_decimal() / count as f64)
}
