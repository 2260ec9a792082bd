//! Compound growth simulators
//!
//! Pure functions of their numeric parameters, stepping in whole months.

pub mod investment;
pub mod loan;
pub mod rate;

pub use investment::{
    investment_growth, investment_trace, InvestmentMonth, InvestmentParams, InvestmentResult,
};
pub use loan::{amortization_schedule, loan_amortization, AmortizationRow, LoanParams, LoanResult};
pub use rate::{
    effective_monthly_rate, period_in_months, PeriodUnit, RateUnit, MAX_SIMULATION_MONTHS,
};
