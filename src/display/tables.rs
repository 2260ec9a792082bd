//! Tables for budgets, breakdowns, trends, goals and simulation traces

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Budget, BudgetPeriod, Currency, Goal};
use crate::reports::{budget_progress, goal_progress, CategoryShare, MonthlyTotals};
use crate::simulation::{AmortizationRow, InvestmentMonth};
use crate::storage::Records;

use super::report::{format_bar, format_day, format_decimal, format_percentage, truncate};

const BAR_WIDTH: usize = 20;

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Budget")]
    name: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Human name of a budget: its category, narrowed by subcategory if set
pub fn budget_label(records: &Records, budget: &Budget) -> String {
    let Some(category) = records.categories.iter().find(|c| c.id == budget.category_id) else {
        return format!("(unknown {})", budget.category_id);
    };
    match budget.subcategory_id.and_then(|id| category.subcategory(id)) {
        Some(sub) => format!("{} / {}", category.name, sub.name),
        None => category.name.clone(),
    }
}

/// Budget progress as of `today`
pub fn format_budget_table(records: &Records, today: NaiveDate, currency: Currency) -> String {
    if records.budgets.is_empty() {
        return "No budgets defined.".to_string();
    }

    let rows = records
        .budgets
        .iter()
        .map(|budget| {
            let progress = budget_progress(budget, &records.transactions, today);
            let mut shown = format_percentage(progress.percentage);
            if progress.is_over_budget() {
                let over = currency.format(progress.overspent(budget));
                shown = format!("{} (over by {})", shown, over);
            }
            BudgetRow {
                name: truncate(&budget_label(records, budget), 30),
                period: match budget.period {
                    BudgetPeriod::Monthly => "Monthly".into(),
                    BudgetPeriod::Yearly => "Yearly".into(),
                },
                limit: currency.format(budget.amount),
                spent: currency.format(progress.spent),
                remaining: currency.format(progress.remaining),
                progress: shown,
                bar: format_bar(progress.percentage, 100.0, BAR_WIDTH),
            }
        })
        .collect();

    render::<BudgetRow>(rows)
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Category breakdown with share bars
pub fn format_breakdown_table(breakdown: &[CategoryShare], currency: Currency) -> String {
    if breakdown.is_empty() {
        return "No transactions in this period.".to_string();
    }

    let rows = breakdown
        .iter()
        .map(|share| ShareRow {
            name: truncate(&share.name, 30),
            count: share.count,
            total: currency.format(share.total),
            share: format_percentage(share.percentage),
            bar: format_bar(share.percentage, 100.0, BAR_WIDTH),
        })
        .collect();

    render::<ShareRow>(rows)
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Income and expense per month
pub fn format_trend_table(trend: &[MonthlyTotals], currency: Currency) -> String {
    let rows = trend
        .iter()
        .map(|m| TrendRow {
            month: m.month.label(),
            income: currency.format(m.income),
            expense: currency.format(m.expense),
            net: currency.format(m.net()),
        })
        .collect();

    render::<TrendRow>(rows)
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Per Month")]
    monthly: String,
}

/// Savings goals with progress as of `today`; deadlines use `date_format`
pub fn format_goal_table(
    goals: &[Goal],
    today: NaiveDate,
    currency: Currency,
    date_format: &str,
) -> String {
    if goals.is_empty() {
        return "No goals defined.".to_string();
    }

    let rows = goals
        .iter()
        .map(|goal| {
            let progress = goal_progress(goal, today);
            let deadline = match (goal.deadline, progress.months_remaining) {
                (Some(date), Some(0)) => format!("{} (passed)", format_day(date, date_format)),
                (Some(date), Some(months)) => {
                    format!("{} ({} mo)", format_day(date, date_format), months)
                }
                _ => "-".to_string(),
            };
            GoalRow {
                name: truncate(&goal.name, 30),
                saved: currency.format(goal.current_amount),
                target: currency.format(goal.target_amount),
                progress: if progress.is_complete {
                    "Done".to_string()
                } else {
                    format_percentage(progress.percentage)
                },
                deadline,
                monthly: if progress.monthly_needed.is_zero() {
                    "-".to_string()
                } else {
                    currency.format(progress.monthly_needed)
                },
            }
        })
        .collect();

    render::<GoalRow>(rows)
}

#[derive(Tabled)]
struct InvestmentRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Total Interest")]
    total_interest: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Month-by-month investment trace
pub fn format_investment_table(trace: &[InvestmentMonth], currency: Currency) -> String {
    let rows = trace
        .iter()
        .map(|m| InvestmentRow {
            month: m.month,
            interest: format_decimal(m.interest, currency),
            invested: format_decimal(m.cumulative_invested, currency),
            total_interest: format_decimal(m.cumulative_interest, currency),
            balance: format_decimal(m.balance, currency),
        })
        .collect();

    render::<InvestmentRow>(rows)
}

#[derive(Tabled)]
struct AmortizationTableRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Loan amortization schedule
pub fn format_amortization_table(schedule: &[AmortizationRow], currency: Currency) -> String {
    let rows = schedule
        .iter()
        .map(|r| AmortizationTableRow {
            month: r.month,
            payment: format_decimal(r.payment, currency),
            interest: format_decimal(r.interest, currency),
            principal: format_decimal(r.principal, currency),
            balance: format_decimal(r.remaining_balance, currency),
        })
        .collect();

    render::<AmortizationTableRow>(rows)
}
