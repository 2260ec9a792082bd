//! Investment growth simulation
//!
//! Each monthly step adds the contribution first and then compounds the
//! post-contribution balance at the effective monthly rate:
//!
//! ```text
//! balance = (balance + contribution) * (1 + monthly_rate)
//! ```
//!
//! The summary and the per-month trace are driven by the same step iterator,
//! so the trace's last balance is always exactly the summary's future value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rate::{
    effective_monthly_rate, period_in_months, PeriodUnit, RateUnit, MAX_SIMULATION_MONTHS,
};

/// Inputs for an investment simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParams {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    /// Nominal rate as a percentage
    pub rate: f64,
    pub rate_unit: RateUnit,
    pub period: i64,
    pub period_unit: PeriodUnit,
}

impl InvestmentParams {
    pub fn new(
        initial_amount: f64,
        monthly_contribution: f64,
        rate: f64,
        rate_unit: RateUnit,
    ) -> Self {
        Self {
            initial_amount,
            monthly_contribution,
            rate,
            rate_unit,
            period: 12,
            period_unit: PeriodUnit::Months,
        }
    }

    /// Set the simulated period
    pub fn over(mut self, period: i64, unit: PeriodUnit) -> Self {
        self.period = period;
        self.period_unit = unit;
        self
    }

    pub fn monthly_rate(&self) -> f64 {
        effective_monthly_rate(self.rate, self.rate_unit)
    }

    pub fn months(&self) -> u32 {
        period_in_months(self.period, self.period_unit)
    }

    /// Why the parameters cannot be simulated, if they can't
    fn rejection(&self) -> Option<&'static str> {
        let monthly_rate = self.monthly_rate();
        if !self.initial_amount.is_finite()
            || !self.monthly_contribution.is_finite()
            || !self.rate.is_finite()
            || !monthly_rate.is_finite()
        {
            Some("non-finite input")
        } else if self.initial_amount < 0.0 || self.monthly_contribution < 0.0 {
            Some("negative amount")
        } else if self.months() == 0 {
            Some("non-positive period")
        } else if self.months() > MAX_SIMULATION_MONTHS {
            Some("period too long")
        } else if monthly_rate <= -1.0 {
            Some("rate wipes out the balance")
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.rejection().is_none()
    }
}

/// One row of the per-month trace
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentMonth {
    /// 1-based month number
    pub month: u32,
    /// Interest accrued during this step: `(before + contribution) * rate`
    pub interest: f64,
    pub cumulative_invested: f64,
    pub cumulative_interest: f64,
    /// Balance at the end of the step
    pub balance: f64,
}

impl InvestmentMonth {
    fn is_finite(&self) -> bool {
        self.interest.is_finite()
            && self.cumulative_invested.is_finite()
            && self.cumulative_interest.is_finite()
            && self.balance.is_finite()
    }
}

/// Summary of an investment simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentResult {
    pub valid: bool,
    pub monthly_rate: f64,
    pub months: u32,
    pub future_value: f64,
    pub total_invested: f64,
    pub interest_earned: f64,
}

impl InvestmentResult {
    fn invalid() -> Self {
        Self {
            valid: false,
            monthly_rate: 0.0,
            months: 0,
            future_value: 0.0,
            total_invested: 0.0,
            interest_earned: 0.0,
        }
    }
}

/// Iterator over simulation steps
struct Steps {
    contribution: f64,
    rate: f64,
    months: u32,
    month: u32,
    balance: f64,
    invested: f64,
    interest_total: f64,
}

impl Steps {
    fn new(params: &InvestmentParams) -> Self {
        Self {
            contribution: params.monthly_contribution,
            rate: params.monthly_rate(),
            months: params.months(),
            month: 0,
            balance: params.initial_amount,
            invested: params.initial_amount,
            interest_total: 0.0,
        }
    }
}

impl Iterator for Steps {
    type Item = InvestmentMonth;

    fn next(&mut self) -> Option<Self::Item> {
        if self.month >= self.months {
            return None;
        }
        self.month += 1;

        let funded = self.balance + self.contribution;
        let interest = funded * self.rate;
        self.balance = funded * (1.0 + self.rate);
        self.invested += self.contribution;
        self.interest_total += interest;

        Some(InvestmentMonth {
            month: self.month,
            interest,
            cumulative_invested: self.invested,
            cumulative_interest: self.interest_total,
            balance: self.balance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.months - self.month) as usize;
        (left, Some(left))
    }
}

/// Simulate investment growth.
///
/// Invalid parameters, and parameters whose balance overflows, produce an
/// all-zero result with `valid == false`.
pub fn investment_growth(params: &InvestmentParams) -> InvestmentResult {
    if let Some(reason) = params.rejection() {
        debug!(?params, reason, "Investment simulation rejected");
        return InvestmentResult::invalid();
    }

    let months = params.months();
    let future_value = Steps::new(params)
        .last()
        .map_or(params.initial_amount, |step| step.balance);
    let total_invested = params.initial_amount + params.monthly_contribution * f64::from(months);
    let interest_earned = future_value - total_invested;
    if !future_value.is_finite() || !total_invested.is_finite() || !interest_earned.is_finite() {
        debug!(?params, "Investment balance overflowed");
        return InvestmentResult::invalid();
    }

    InvestmentResult {
        valid: true,
        monthly_rate: params.monthly_rate(),
        months,
        future_value,
        total_invested,
        interest_earned,
    }
}

/// Per-month trace of the simulation; empty whenever [`investment_growth`]
/// reports the parameters as invalid
pub fn investment_trace(params: &InvestmentParams) -> Vec<InvestmentMonth> {
    if let Some(reason) = params.rejection() {
        debug!(?params, reason, "Investment trace rejected");
        return Vec::new();
    }
    let trace: Vec<InvestmentMonth> = Steps::new(params).collect();
    if !trace.iter().all(InvestmentMonth::is_finite) {
        debug!(?params, "Investment trace overflowed");
        return Vec::new();
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scenario() -> InvestmentParams {
        InvestmentParams::new(1000.0, 100.0, 12.0, RateUnit::Annual).over(12, PeriodUnit::Months)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reference_scenario() {
        let result = investment_growth(&scenario());
        assert!(result.valid);
        assert_eq!(result.months, 12);
        assert!(close(result.monthly_rate, 0.009488792934583046));
        assert!(close(result.total_invested, 2200.0));
        assert!(close(result.future_value, 2396.64979083532));
        assert!(close(result.interest_earned, 196.6497908353199));
    }

    #[test]
    fn test_trace_matches_summary() {
        let params = scenario();
        let result = investment_growth(&params);
        let trace = investment_trace(&params);

        assert_eq!(trace.len(), 12);
        let last = trace.last().unwrap();
        assert_eq!(last.month, 12);
        assert_eq!(last.balance, result.future_value);
        assert!(close(last.cumulative_invested, result.total_invested));
        assert!(close(last.cumulative_interest, result.interest_earned));
    }

    #[test]
    fn test_trace_interest_is_step_interest() {
        let params = scenario();
        let rate = params.monthly_rate();
        let trace = investment_trace(&params);

        let first = trace[0];
        assert!(close(first.interest, 1100.0 * rate));
        assert!(close(first.cumulative_invested, 1100.0));

        let second = trace[1];
        assert!(close(second.interest, (first.balance + 100.0) * rate));
        // Not the plain balance delta, which also includes the contribution
        assert!(!close(second.interest, second.balance - first.balance));
    }

    #[test]
    fn test_years_period() {
        let params =
            InvestmentParams::new(500.0, 0.0, 1.0, RateUnit::Monthly).over(2, PeriodUnit::Years);
        let result = investment_growth(&params);
        assert_eq!(result.months, 24);
        assert!(close(result.future_value, 500.0 * 1.01f64.powi(24)));
    }

    #[test]
    fn test_zero_rate_accumulates_contributions() {
        let params =
            InvestmentParams::new(100.0, 50.0, 0.0, RateUnit::Annual).over(10, PeriodUnit::Months);
        let result = investment_growth(&params);
        assert!(result.valid);
        assert_eq!(result.future_value, 600.0);
        assert_eq!(result.interest_earned, 0.0);
    }

    #[test]
    fn test_invalid_inputs_yield_zeroes() {
        let cases = [
            InvestmentParams::new(-1.0, 0.0, 10.0, RateUnit::Annual),
            InvestmentParams::new(100.0, -5.0, 10.0, RateUnit::Annual),
            InvestmentParams::new(100.0, 0.0, f64::NAN, RateUnit::Annual),
            InvestmentParams::new(f64::INFINITY, 0.0, 10.0, RateUnit::Annual),
            InvestmentParams::new(100.0, 0.0, 10.0, RateUnit::Annual).over(0, PeriodUnit::Months),
            InvestmentParams::new(100.0, 0.0, 10.0, RateUnit::Annual).over(-2, PeriodUnit::Years),
            InvestmentParams::new(100.0, 0.0, -100.0, RateUnit::Monthly),
        ];
        for params in cases {
            let result = investment_growth(&params);
            assert!(!result.valid, "{params:?}");
            assert_eq!(result.future_value, 0.0);
            assert_eq!(result.total_invested, 0.0);
            assert_eq!(result.interest_earned, 0.0);
            assert!(investment_trace(&params).is_empty());
        }
    }

    #[test]
    fn test_overflowing_balance_is_invalid() {
        let cases = [
            InvestmentParams::new(1e300, 0.0, 100.0, RateUnit::Monthly)
                .over(100, PeriodUnit::Years),
            InvestmentParams::new(1000.0, 0.0, 50.0, RateUnit::Monthly)
                .over(200, PeriodUnit::Years),
            InvestmentParams::new(0.0, f64::MAX, 0.0, RateUnit::Annual)
                .over(24, PeriodUnit::Months),
        ];
        for params in cases {
            let result = investment_growth(&params);
            assert!(!result.valid, "{params:?}");
            assert_eq!(result.future_value, 0.0);
            assert_eq!(result.interest_earned, 0.0);
            assert!(investment_trace(&params).is_empty());
        }
    }

    #[test]
    fn test_period_longer_than_limit_is_invalid() {
        let params = InvestmentParams::new(100.0, 10.0, 1.0, RateUnit::Annual)
            .over(100_000_000, PeriodUnit::Years);
        assert!(!params.is_valid());
        assert!(!investment_growth(&params).valid);
        assert!(investment_trace(&params).is_empty());

        let longest = InvestmentParams::new(100.0, 0.0, 0.0, RateUnit::Annual)
            .over(i64::from(MAX_SIMULATION_MONTHS), PeriodUnit::Months);
        assert!(longest.is_valid());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(investment_growth(&scenario()), investment_growth(&scenario()));
    }

    proptest! {
        #[test]
        fn prop_no_contribution_matches_closed_form(
            initial in 0.0f64..1_000_000.0,
            rate in 0.0f64..30.0,
            months in 1i64..480,
        ) {
            let params = InvestmentParams::new(initial, 0.0, rate, RateUnit::Annual)
                .over(months, PeriodUnit::Months);
            let result = investment_growth(&params);
            let expected = initial * (1.0 + params.monthly_rate()).powi(months as i32);
            prop_assert!(result.valid);
            prop_assert!((result.future_value - expected).abs() <= expected.abs() * 1e-9 + 1e-9);
        }

        #[test]
        fn prop_trace_length_matches_months(months in 1i64..240) {
            let params = InvestmentParams::new(10.0, 1.0, 5.0, RateUnit::Annual)
                .over(months, PeriodUnit::Months);
            prop_assert_eq!(investment_trace(&params).len() as i64, months);
        }
    }
}
