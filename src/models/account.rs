//! Account model
//!
//! Represents holdings of funds or credit (cash, bank, credit cards, etc.)

use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;
use super::ids::AccountId;
use super::money::Money;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Cash/wallet
    Cash,
    /// Checking or savings account at a bank
    #[default]
    Bank,
    /// Credit card
    Credit,
    /// Investment account
    Investment,
    /// Other account type
    Other,
}

impl AccountType {
    /// Credit accounts hold debt and are left out of balance totals
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Credit)
    }

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "bank" | "checking" | "savings" => Some(Self::Bank),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "investment" => Some(Self::Investment),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Bank => write!(f, "Bank"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Investment => write!(f, "Investment"),
            Self::Other => write!(f, "Other"),
        }
    }
}

fn default_active() -> bool {
    true
}

fn default_currency_code() -> String {
    Currency::default().code().to_string()
}

/// A financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Nubank")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Current balance, signed
    pub balance: Money,

    /// ISO 4217 currency code
    #[serde(default = "default_currency_code")]
    pub currency: String,

    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Credit limit (credit accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<Money>,

    /// Payment due day-of-month, 1-31 (credit accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<u32>,

    /// Statement closing day-of-month, 1-31 (credit accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_date: Option<u32>,
}

impl Account {
    /// Create a new active account with a zero balance in the default currency
    pub fn new(name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            balance: Money::zero(),
            currency: default_currency_code(),
            is_active: true,
            credit_limit: None,
            due_date: None,
            closing_date: None,
        }
    }

    /// Create a new account with a balance
    pub fn with_balance(
        name: impl Into<String>,
        account_type: AccountType,
        balance: Money,
    ) -> Self {
        let mut account = Self::new(name, account_type);
        account.balance = balance;
        account
    }

    /// Create a credit card account
    pub fn credit_card(
        name: impl Into<String>,
        credit_limit: Money,
        due_date: u32,
        closing_date: u32,
    ) -> Self {
        let mut account = Self::new(name, AccountType::Credit);
        account.credit_limit = Some(credit_limit);
        account.due_date = Some(due_date);
        account.closing_date = Some(closing_date);
        account
    }

    /// Resolved currency (unsupported codes fall back to the default)
    pub fn currency(&self) -> Currency {
        Currency::from_code_or_default(&self.currency)
    }

    /// Credit still available on a credit account (limit minus debt)
    pub fn available_credit(&self) -> Option<Money> {
        self.credit_limit
            .map(|limit| (limit - self.balance.abs()).non_negative())
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        if self.account_type.is_credit() && self.credit_limit.is_none() {
            return Err(AccountValidationError::MissingCreditLimit);
        }

        for day in [self.due_date, self.closing_date].into_iter().flatten() {
            if !(1..=31).contains(&day) {
                return Err(AccountValidationError::InvalidDayOfMonth(day));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    MissingCreditLimit,
    InvalidDayOfMonth(u32),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::MissingCreditLimit => write!(f, "Credit accounts need a credit limit"),
            Self::InvalidDayOfMonth(day) => {
                write!(f, "Day of month must be between 1 and 31, got {}", day)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
