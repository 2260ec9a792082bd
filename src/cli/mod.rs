//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reports, simulators and
//! exporters.

pub mod config;
pub mod currency;
pub mod export;
pub mod report;
pub mod simulate;

pub use config::{handle_config_command, print_config, ConfigCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use simulate::{handle_simulate_command, SimulateCommands};

use chrono::NaiveDate;

use crate::models::{Currency, Money, Month, TransactionType};
use crate::simulation::{PeriodUnit, RateUnit};

/// Output format for commands that can print structured data
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Structured data format for exports
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

pub fn parse_month(s: &str) -> Result<Month, String> {
    Month::parse(s).map_err(|e| e.to_string())
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_currency(s: &str) -> Result<Currency, String> {
    s.parse::<Currency>().map_err(|e| e.to_string())
}

pub fn parse_transaction_type(s: &str) -> Result<TransactionType, String> {
    TransactionType::parse(s).ok_or_else(|| {
        format!("Invalid transaction type '{}', expected income or expense", s)
    })
}

/// Parse an amount such as "1000", "1.234,56" or "$1,234.56" as a decimal
pub fn parse_amount(s: &str) -> Result<f64, String> {
    Money::parse(s).map(|m| m.as_decimal()).map_err(|e| e.to_string())
}

pub fn parse_rate_unit(s: &str) -> Result<RateUnit, String> {
    RateUnit::parse(s)
        .ok_or_else(|| format!("Invalid rate unit '{}', expected annual or monthly", s))
}

pub fn parse_period_unit(s: &str) -> Result<PeriodUnit, String> {
    PeriodUnit::parse(s)
        .ok_or_else(|| format!("Invalid period unit '{}', expected years or months", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03").unwrap(), Month::new(2025, 3).unwrap());
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("March").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(parse_date("15/03/2025").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000").unwrap(), 1000.0);
        assert_eq!(parse_amount("1.234,56").unwrap(), 1234.56);
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1234.56);
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_rate_unit("monthly").unwrap(), RateUnit::Monthly);
        assert_eq!(parse_period_unit("years").unwrap(), PeriodUnit::Years);
        assert!(parse_rate_unit("weekly").is_err());
        assert!(parse_period_unit("days").is_err());
    }

    #[test]
    fn test_parse_currency_and_type() {
        assert_eq!(parse_currency("USD").unwrap(), Currency::Usd);
        assert!(parse_currency("XYZ").is_err());
        assert_eq!(parse_transaction_type("income").unwrap(), TransactionType::Income);
        assert!(parse_transaction_type("transfer").is_err());
    }
}
