//! Display formatting for terminal output
//!
//! Text layouts and tables for reports and simulation results. Amounts are
//! always rendered through [`Currency`](crate::models::Currency).

pub mod dashboard;
pub mod report;
pub mod tables;

pub use dashboard::format_dashboard;
pub use report::{format_bar, format_change, format_day, format_decimal, format_percentage};
pub use tables::{
    budget_label, format_amortization_table, format_breakdown_table, format_budget_table,
    format_goal_table, format_investment_table, format_trend_table,
};
