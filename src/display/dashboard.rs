//! Dashboard formatting
//!
//! Plain-text layout of a [`DashboardSummary`] for the terminal.

use crate::models::{Currency, Transaction};
use crate::reports::DashboardSummary;

use super::report::{
    double_separator, format_bar, format_change, format_day, format_percentage, separator, truncate,
};

const WIDTH: usize = 60;

fn transaction_line(txn: &Transaction, currency: Currency, date_format: &str) -> String {
    let description = if txn.description.is_empty() {
        "(no description)"
    } else {
        txn.description.as_str()
    };
    format!(
        "  {:<10}  {:<30}  {:>16}\n",
        format_day(txn.date, date_format),
        truncate(description, 30),
        currency.format(txn.amount)
    )
}

/// Format the dashboard summary as a terminal report.
///
/// Transaction dates use the strftime pattern `date_format`.
pub fn format_dashboard(
    summary: &DashboardSummary,
    currency: Currency,
    date_format: &str,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Dashboard - {}\n", summary.month.label()));
    out.push_str(&double_separator(WIDTH));
    out.push('\n');

    out.push_str(&format!(
        "{:<24}{:>20}\n",
        "Total balance",
        currency.format(summary.total_balance)
    ));
    out.push_str(&format!(
        "{:<24}{:>20}  {}\n",
        "Income",
        currency.format(summary.income),
        format_change(summary.income_change)
    ));
    out.push_str(&format!(
        "{:<24}{:>20}  {}\n",
        "Expenses",
        currency.format(summary.expense),
        format_change(summary.expense_change)
    ));
    out.push_str(&format!("{:<24}{:>20}\n", "Net", currency.format(summary.net())));
    out.push_str(&format!(
        "{:<24}{:>20}\n",
        "Savings rate",
        format_percentage(summary.savings_rate)
    ));
    out.push_str(&format!(
        "{:<24}{:>20}  over {} days\n",
        "Average daily expense",
        currency.format(summary.average_daily_expense),
        summary.expense_days
    ));
    out.push_str(&format!("{:<24}{:>20}\n", "Active accounts", summary.active_accounts));
    out.push_str(&format!(
        "{:<24}{:>20}\n",
        "Goals",
        format!("{} ({} done)", summary.goals, summary.goals_completed)
    ));

    if !summary.expense_breakdown.is_empty() {
        out.push('\n');
        out.push_str("Spending by category\n");
        out.push_str(&separator(WIDTH));
        out.push('\n');
        for share in &summary.expense_breakdown {
            out.push_str(&format!(
                "  {:<20} {:>16} {:>6}  {}\n",
                truncate(&share.name, 20),
                currency.format(share.total),
                format_percentage(share.percentage),
                format_bar(share.percentage, 100.0, 10)
            ));
        }
    }

    let top = [
        ("Top income", &summary.top_income),
        ("Top expenses", &summary.top_expenses),
    ];
    for (title, list) in top {
        if list.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(title);
        out.push('\n');
        out.push_str(&separator(WIDTH));
        out.push('\n');
        for txn in list {
            out.push_str(&transaction_line(txn, currency, date_format));
        }
    }

    if let Some(smallest) = &summary.smallest_expense {
        out.push('\n');
        out.push_str("Smallest expense\n");
        out.push_str(&transaction_line(smallest, currency, date_format));
    }

    if !summary.trend.is_empty() {
        let max = summary
            .trend
            .iter()
            .map(|m| m.income.max(m.expense).as_decimal())
            .fold(0.0, f64::max);

        out.push('\n');
        out.push_str("Monthly trend\n");
        out.push_str(&separator(WIDTH));
        out.push('\n');
        for month in &summary.trend {
            out.push_str(&format!(
                "  {:<9} in  {:>16} {}\n",
                month.month.label(),
                currency.format(month.income),
                format_bar(month.income.as_decimal(), max, 16)
            ));
            out.push_str(&format!(
                "  {:<9} out {:>16} {}\n",
                "",
                currency.format(month.expense),
                format_bar(month.expense.as_decimal(), max, 16)
            ));
        }
    }

    out
}
