//! User settings for Finsight
//!
//! Display currency, dashboard sizes and the basis used for the average daily
//! expense.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::FinsightPaths;
use crate::error::FinsightError;
use crate::models::{format_date, Currency};

/// Day count used for the dashboard's average daily expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AverageDailyBasis {
    /// Days elapsed so far when looking at the current month
    #[default]
    Elapsed,
    /// Always the full length of the month
    Month,
}

impl AverageDailyBasis {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "elapsed" => Some(Self::Elapsed),
            "month" => Some(Self::Month),
            _ => None,
        }
    }
}

impl fmt::Display for AverageDailyBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elapsed => write!(f, "elapsed"),
            Self::Month => write!(f, "month"),
        }
    }
}

/// User settings for Finsight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// ISO 4217 code used when formatting amounts
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// How many transactions the dashboard lists per type
    #[serde(default = "default_top_transactions")]
    pub top_transactions: usize,

    /// Months covered by the monthly trend
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,

    #[serde(default)]
    pub average_daily_basis: AverageDailyBasis,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_top_transactions() -> usize {
    5
}

fn default_trend_months() -> usize {
    6
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            top_transactions: default_top_transactions(),
            trend_months: default_trend_months(),
            average_daily_basis: AverageDailyBasis::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Settings keys accepted by [`Settings::set`]
    pub const KEYS: [&'static str; 5] = [
        "default_currency",
        "top_transactions",
        "trend_months",
        "average_daily_basis",
        "date_format",
    ];

    /// The configured currency, falling back to BRL for unknown codes
    pub fn currency(&self) -> Currency {
        Currency::from_code_or_default(&self.default_currency)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinsightPaths) -> Result<Self, FinsightError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinsightError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinsightError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinsightPaths) -> Result<(), FinsightError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinsightError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinsightError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Update one setting from its textual value
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), FinsightError> {
        let invalid = |what: &str| {
            FinsightError::Config(format!("Invalid {} for {}: '{}'", what, key, value))
        };

        match key {
            "default_currency" => {
                let currency = Currency::from_code(value).ok_or_else(|| invalid("currency code"))?;
                self.default_currency = currency.code().to_string();
            }
            "top_transactions" => {
                self.top_transactions = value.trim().parse().map_err(|_| invalid("count"))?;
            }
            "trend_months" => {
                let months: usize = value.trim().parse().map_err(|_| invalid("count"))?;
                if months == 0 {
                    return Err(invalid("count"));
                }
                self.trend_months = months;
            }
            "average_daily_basis" => {
                self.average_daily_basis =
                    AverageDailyBasis::parse(value).ok_or_else(|| invalid("basis"))?;
            }
            "date_format" => {
                let sample = chrono::NaiveDate::from_ymd_opt(2000, 1, 31)
                    .unwrap_or(chrono::NaiveDate::MIN);
                if value.trim().is_empty() || format_date(sample, value).is_none() {
                    return Err(invalid("format"));
                }
                self.date_format = value.to_string();
            }
            _ => {
                return Err(FinsightError::Config(format!(
                    "Unknown setting '{}'. Valid keys: {}",
                    key,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
