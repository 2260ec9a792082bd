//! Transaction model
//!
//! A dated income or expense record. The stored amount is always a positive
//! magnitude; [`TransactionType`] carries the sign semantics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::ids::{AccountId, CategoryId, SubcategoryId, TransactionId};
use super::money::Money;

/// Polarity of a transaction or category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse a transaction type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl fmt::Display for RecurringFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Biweekly => write!(f, "Biweekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// Category, if the transaction has been classified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// Subcategory within the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<SubcategoryId>,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Positive magnitude
    pub amount: Money,

    #[serde(default)]
    pub description: String,

    /// Calendar date, no time component
    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,

    #[serde(default)]
    pub recurring: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<RecurringFrequency>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        account_id: AccountId,
        kind: TransactionType,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            account_id,
            category_id: None,
            subcategory_id: None,
            kind,
            amount,
            description: String::new(),
            date,
            notes: None,
            tags: BTreeSet::new(),
            recurring: false,
            recurring_frequency: None,
        }
    }

    /// Create an income transaction
    pub fn income(account_id: AccountId, amount: Money, date: NaiveDate) -> Self {
        Self::new(account_id, TransactionType::Income, amount, date)
    }

    /// Create an expense transaction
    pub fn expense(account_id: AccountId, amount: Money, date: NaiveDate) -> Self {
        Self::new(account_id, TransactionType::Expense, amount, date)
    }

    /// Assign a category (and optionally a subcategory)
    pub fn categorized(
        mut self,
        category_id: CategoryId,
        subcategory_id: Option<SubcategoryId>,
    ) -> Self {
        self.category_id = Some(category_id);
        self.subcategory_id = subcategory_id;
        self
    }

    /// Set the description
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark as recurring with a frequency
    pub fn recurring_every(mut self, frequency: RecurringFrequency) -> Self {
        self.recurring = true;
        self.recurring_frequency = Some(frequency);
        self
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.subcategory_id.is_some() && self.category_id.is_none() {
            return Err(TransactionValidationError::SubcategoryWithoutCategory);
        }

        if self.recurring_frequency.is_some() && !self.recurring {
            return Err(TransactionValidationError::FrequencyWithoutRecurring);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.description
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Transaction amount must be positive, got {0}")]
    NonPositiveAmount(Money),
    #[error("Transaction has a subcategory but no category")]
    SubcategoryWithoutCategory,
    #[error("Recurring frequency set on a non-recurring transaction")]
    FrequencyWithoutRecurring,
}
