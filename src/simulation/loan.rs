//! Loan amortization with a fixed monthly payment

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rate::{
    effective_monthly_rate, period_in_months, PeriodUnit, RateUnit, MAX_SIMULATION_MONTHS,
};

/// Below half a cent a leftover balance is float noise
const BALANCE_EPSILON: f64 = 0.005;

/// Inputs for a loan simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParams {
    pub principal: f64,
    /// Nominal rate as a percentage
    pub rate: f64,
    pub rate_unit: RateUnit,
    pub period: i64,
    pub period_unit: PeriodUnit,
}

impl LoanParams {
    pub fn new(
        principal: f64,
        rate: f64,
        rate_unit: RateUnit,
        period: i64,
        period_unit: PeriodUnit,
    ) -> Self {
        Self {
            principal,
            rate,
            rate_unit,
            period,
            period_unit,
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        effective_monthly_rate(self.rate, self.rate_unit)
    }

    pub fn months(&self) -> u32 {
        period_in_months(self.period, self.period_unit)
    }

    fn rejection(&self) -> Option<&'static str> {
        if !self.principal.is_finite() || !self.rate.is_finite() {
            Some("non-finite input")
        } else if self.principal <= 0.0 {
            Some("non-positive principal")
        } else if self.rate <= 0.0 {
            Some("non-positive rate")
        } else if self.period <= 0 || self.months() == 0 {
            Some("non-positive period")
        } else if self.months() > MAX_SIMULATION_MONTHS {
            Some("period too long")
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.rejection().is_none()
    }
}

/// Summary of a loan simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanResult {
    pub valid: bool,
    pub monthly_rate: f64,
    pub months: u32,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl LoanResult {
    fn invalid() -> Self {
        Self {
            valid: false,
            monthly_rate: 0.0,
            months: 0,
            monthly_payment: 0.0,
            total_payment: 0.0,
            total_interest: 0.0,
        }
    }
}

/// One row of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub remaining_balance: f64,
}

/// Annuity payment for a valid loan
fn annuity_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    let growth = (1.0 + monthly_rate).powf(f64::from(months));
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Solve the fixed monthly payment and totals for a loan.
///
/// Non-positive principal, rate or period give an all-zero result with
/// `valid == false`.
pub fn loan_amortization(params: &LoanParams) -> LoanResult {
    if let Some(reason) = params.rejection() {
        debug!(?params, reason, "Loan simulation rejected");
        return LoanResult::invalid();
    }

    let monthly_rate = params.monthly_rate();
    let months = params.months();
    let monthly_payment = annuity_payment(params.principal, monthly_rate, months);
    let total_payment = monthly_payment * f64::from(months);
    let total_interest = total_payment - params.principal;
    if !monthly_payment.is_finite() || !total_payment.is_finite() || !total_interest.is_finite() {
        debug!(?params, "Loan payment overflowed");
        return LoanResult::invalid();
    }

    LoanResult {
        valid: true,
        monthly_rate,
        months,
        monthly_payment,
        total_payment,
        total_interest,
    }
}

/// Month-by-month split of each payment into interest and principal.
///
/// Empty for invalid parameters.
pub fn amortization_schedule(params: &LoanParams) -> Vec<AmortizationRow> {
    let summary = loan_amortization(params);
    if !summary.valid {
        return Vec::new();
    }

    let mut balance = params.principal;
    let mut rows = Vec::with_capacity(summary.months as usize);
    for month in 1..=summary.months {
        let interest = balance * summary.monthly_rate;
        let principal = summary.monthly_payment - interest;
        balance -= principal;
        if month == summary.months && balance.abs() < BALANCE_EPSILON {
            balance = 0.0;
        }
        rows.push(AmortizationRow {
            month,
            payment: summary.monthly_payment,
            interest,
            principal,
            remaining_balance: balance.max(0.0),
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_monthly_rate_loan() {
        let params = LoanParams::new(10000.0, 1.0, RateUnit::Monthly, 12, PeriodUnit::Months);
        let result = loan_amortization(&params);
        assert!(result.valid);
        assert_eq!(result.months, 12);
        assert!(close(result.monthly_payment, 888.4878867834168));
        assert!(close(result.total_payment, 10661.854641401002));
        assert!(close(result.total_interest, 661.8546414010016));
    }

    #[test]
    fn test_annual_rate_loan() {
        let params = LoanParams::new(10000.0, 12.0, RateUnit::Annual, 1, PeriodUnit::Years);
        let result = loan_amortization(&params);
        assert!(result.valid);
        assert_eq!(result.months, 12);
        assert!(close(result.monthly_payment, 885.6206738944111));
    }

    #[test]
    fn test_degenerate_inputs_are_invalid() {
        let cases = [
            LoanParams::new(0.0, 1.0, RateUnit::Monthly, 12, PeriodUnit::Months),
            LoanParams::new(-500.0, 1.0, RateUnit::Monthly, 12, PeriodUnit::Months),
            LoanParams::new(1000.0, 0.0, RateUnit::Monthly, 12, PeriodUnit::Months),
            LoanParams::new(1000.0, -3.0, RateUnit::Annual, 12, PeriodUnit::Months),
            LoanParams::new(1000.0, 1.0, RateUnit::Monthly, 0, PeriodUnit::Months),
            LoanParams::new(1000.0, 1.0, RateUnit::Monthly, -1, PeriodUnit::Years),
            LoanParams::new(f64::NAN, 1.0, RateUnit::Monthly, 12, PeriodUnit::Months),
        ];
        for params in cases {
            let result = loan_amortization(&params);
            assert!(!result.valid, "{params:?}");
            assert_eq!(result.monthly_payment, 0.0);
            assert_eq!(result.total_payment, 0.0);
            assert_eq!(result.total_interest, 0.0);
            assert!(amortization_schedule(&params).is_empty());
        }
    }

    #[test]
    fn test_overflowing_totals_are_invalid() {
        let params = LoanParams::new(1e308, 0.1, RateUnit::Monthly, 6000, PeriodUnit::Months);
        let result = loan_amortization(&params);
        assert!(!result.valid);
        assert_eq!(result.total_payment, 0.0);
        assert_eq!(result.total_interest, 0.0);
        assert!(amortization_schedule(&params).is_empty());
    }

    #[test]
    fn test_period_longer_than_limit_is_invalid() {
        let params =
            LoanParams::new(1000.0, 1.0, RateUnit::Monthly, 100_000_000, PeriodUnit::Years);
        assert!(!params.is_valid());
        assert!(!loan_amortization(&params).valid);
        assert!(amortization_schedule(&params).is_empty());
    }

    #[test]
    fn test_schedule_pays_off_loan() {
        let params = LoanParams::new(10000.0, 1.0, RateUnit::Monthly, 12, PeriodUnit::Months);
        let summary = loan_amortization(&params);
        let rows = amortization_schedule(&params);

        assert_eq!(rows.len(), 12);
        assert!(close(rows[0].interest, 100.0));
        assert!(close(rows[0].principal, summary.monthly_payment - 100.0));
        assert_eq!(rows[11].remaining_balance, 0.0);

        let principal_paid: f64 = rows.iter().map(|r| r.principal).sum();
        let interest_paid: f64 = rows.iter().map(|r| r.interest).sum();
        assert!(close(principal_paid, 10000.0));
        assert!(close(interest_paid, summary.total_interest));

        // Interest share shrinks as the balance is paid down
        assert!(rows.windows(2).all(|w| w[1].interest < w[0].interest));
    }

    proptest! {
        #[test]
        fn prop_payment_minus_interest_is_principal(
            principal in 1.0f64..1_000_000.0,
            rate in 0.01f64..40.0,
            months in 1i64..360,
        ) {
            let params =
                LoanParams::new(principal, rate, RateUnit::Annual, months, PeriodUnit::Months);
            let result = loan_amortization(&params);
            prop_assert!(result.valid);
            let recovered = result.total_payment - result.total_interest;
            prop_assert!((recovered - principal).abs() <= principal * 1e-9);
        }
    }
}
