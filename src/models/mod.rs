//! Core data models for Finsight
//!
//! Immutable value records supplied by the record store: accounts,
//! transactions, categories, budgets and goals, plus the money, currency and
//! calendar primitives the engine computes with.

pub mod account;
pub mod budget;
pub mod category;
pub mod currency;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use account::{Account, AccountType, AccountValidationError};
pub use budget::{Budget, BudgetPeriod, BudgetValidationError};
pub use category::{Category, CategoryValidationError, Subcategory};
pub use currency::{format_currency, format_money, parse_currency_input, Currency, CurrencyInput};
pub use goal::{Goal, GoalValidationError};
pub use ids::{AccountId, BudgetId, CategoryId, GoalId, SubcategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{
    format_date, last_n_months, month_range, DateRange, Month, PeriodParseError, MAX_MONTHS_BACK,
};
pub use transaction::{RecurringFrequency, Transaction, TransactionType, TransactionValidationError};
