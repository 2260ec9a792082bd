//! Reports module for Finsight
//!
//! Aggregation over transactions and accounts, budget and goal progress, and
//! the dashboard summary composed from them.

pub mod aggregation;
pub mod budget_progress;
pub mod dashboard;
pub mod goal_progress;

pub use aggregation::{
    active_balance, group_by_category, monthly_totals, percentage_of_total,
    period_over_period_change, savings_rate, sum_by_account, sum_by_type, total_balance,
    AccountTotals, CategoryTotal, MonthlyTotals, PeriodChange,
};
pub use budget_progress::{budget_progress, budget_progress_all, BudgetProgress};
pub use dashboard::{category_breakdown, CategoryShare, DashboardOptions, DashboardSummary};
pub use goal_progress::{goal_progress, GoalProgress};
