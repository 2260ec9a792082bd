//! Rate and period normalisation shared by the simulators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit an interest rate was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RateUnit {
    #[default]
    Annual,
    Monthly,
}

impl RateUnit {
    /// Parse a rate unit from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "annual" | "yearly" | "year" | "a" | "y" => Some(Self::Annual),
            "monthly" | "month" | "m" => Some(Self::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for RateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Annual => write!(f, "per year"),
            Self::Monthly => write!(f, "per month"),
        }
    }
}

/// Unit a duration was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Years,
    #[default]
    Months,
}

impl PeriodUnit {
    /// Parse a period unit from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "years" | "year" | "y" => Some(Self::Years),
            "months" | "month" | "m" => Some(Self::Months),
            _ => None,
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years => write!(f, "years"),
            Self::Months => write!(f, "months"),
        }
    }
}

/// Longest simulation accepted: 1200 years of monthly steps
pub const MAX_SIMULATION_MONTHS: u32 = 1200 * 12;

/// Effective monthly rate (as a fraction) for a percentage rate.
///
/// Annual rates convert by compound equivalence, `(1 + r/100)^(1/12) - 1`,
/// not by dividing by twelve. Monthly rates are used as entered.
pub fn effective_monthly_rate(rate_percent: f64, unit: RateUnit) -> f64 {
    match unit {
        RateUnit::Annual => (1.0 + rate_percent / 100.0).powf(1.0 / 12.0) - 1.0,
        RateUnit::Monthly => rate_percent / 100.0,
    }
}

/// Number of monthly steps in a period; non-positive periods give zero
pub fn period_in_months(period: i64, unit: PeriodUnit) -> u32 {
    let months = match unit {
        PeriodUnit::Years => period.saturating_mul(12),
        PeriodUnit::Months => period,
    };
    u32::try_from(months.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_rate_uses_compound_equivalence() {
        let monthly = effective_monthly_rate(12.0, RateUnit::Annual);
        assert!((monthly - 0.009488792934583).abs() < 1e-12);
        assert!(((1.0 + monthly).powi(12) - 1.12).abs() < 1e-12);
    }

    #[test]
    fn test_monthly_rate_is_direct() {
        assert_eq!(effective_monthly_rate(1.5, RateUnit::Monthly), 0.015);
        assert_eq!(effective_monthly_rate(0.0, RateUnit::Annual), 0.0);
    }

    #[test]
    fn test_period_in_months() {
        assert_eq!(period_in_months(2, PeriodUnit::Years), 24);
        assert_eq!(period_in_months(18, PeriodUnit::Months), 18);
        assert_eq!(period_in_months(-3, PeriodUnit::Years), 0);
        assert_eq!(period_in_months(0, PeriodUnit::Months), 0);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!(RateUnit::parse("Monthly"), Some(RateUnit::Monthly));
        assert_eq!(RateUnit::parse("annual"), Some(RateUnit::Annual));
        assert_eq!(PeriodUnit::parse("y"), Some(PeriodUnit::Years));
        assert_eq!(PeriodUnit::parse("weeks"), None);
    }
}
