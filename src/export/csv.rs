//! CSV Export functionality
//!
//! Exports transactions, monthly totals and simulation traces in a
//! spreadsheet-compatible format. Amounts are plain decimals with two
//! fraction digits.

use std::collections::HashMap;
use std::io::Write;

use crate::error::FinsightResult;
use crate::models::format_date;
use crate::reports::aggregation::UNCATEGORIZED_LABEL;
use crate::reports::MonthlyTotals;
use crate::simulation::{AmortizationRow, InvestmentMonth};
use crate::storage::Records;

fn decimal(value: f64) -> String {
    format!("{:.2}", value)
}

/// Export all transactions, resolving account and category names.
///
/// Dates use the strftime pattern `date_format`, or ISO 8601 if it is unusable.
pub fn export_transactions_csv<W: Write>(
    records: &Records,
    date_format: &str,
    writer: W,
) -> FinsightResult<()> {
    let account_names: HashMap<_, _> = records
        .accounts
        .iter()
        .map(|a| (a.id, a.name.as_str()))
        .collect();
    let category_names: HashMap<_, _> = records
        .categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID",
        "Date",
        "Type",
        "Account",
        "Category",
        "Description",
        "Amount",
        "Tags",
        "Recurring",
    ])?;

    for txn in &records.transactions {
        let category = match txn.category_id {
            Some(id) => category_names.get(&id).copied().unwrap_or(UNCATEGORIZED_LABEL),
            None => UNCATEGORIZED_LABEL,
        };
        let account = account_names.get(&txn.account_id).copied().unwrap_or("Unknown");
        let tags = txn.tags.iter().cloned().collect::<Vec<_>>().join(";");

        csv.write_record([
            txn.id.as_uuid().to_string(),
            format_date(txn.date, date_format).unwrap_or_else(|| txn.date.to_string()),
            txn.kind.to_string(),
            account.to_string(),
            category.to_string(),
            txn.description.clone(),
            txn.amount.to_string(),
            tags,
            txn.recurring.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Export income/expense per month
pub fn export_monthly_totals_csv<W: Write>(
    totals: &[MonthlyTotals],
    writer: W,
) -> FinsightResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Month", "Income", "Expense", "Net"])?;
    for row in totals {
        csv.write_record([
            row.month.to_string(),
            row.income.to_string(),
            row.expense.to_string(),
            row.net().to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Export an investment simulation trace
pub fn export_investment_csv<W: Write>(trace: &[InvestmentMonth], writer: W) -> FinsightResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Month", "Interest", "Invested", "Total Interest", "Balance"])?;
    for row in trace {
        csv.write_record([
            row.month.to_string(),
            decimal(row.interest),
            decimal(row.cumulative_invested),
            decimal(row.cumulative_interest),
            decimal(row.balance),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Export a loan amortization schedule
pub fn export_amortization_csv<W: Write>(
    schedule: &[AmortizationRow],
    writer: W,
) -> FinsightResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Month", "Payment", "Interest", "Principal", "Balance"])?;
    for row in schedule {
        csv.write_record([
            row.month.to_string(),
            decimal(row.payment),
            decimal(row.interest),
            decimal(row.principal),
            decimal(row.remaining_balance),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType, Category, Money, Month, Transaction, TransactionType};
    use crate::reports::monthly_totals;
    use crate::simulation::{
        amortization_schedule, investment_trace, InvestmentParams, LoanParams, PeriodUnit, RateUnit,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_transactions_csv_resolves_names_and_quotes() {
        let account = Account::new("Checking", AccountType::Bank);
        let food = Category::new("Food", TransactionType::Expense);
        let records = Records {
            transactions: vec![
                Transaction::expense(account.id, Money::from_cents(1999), date(2025, 3, 1))
                    .categorized(food.id, None)
                    .described("Pizza, large"),
                Transaction::income(account.id, Money::from_cents(500000), date(2025, 3, 5)),
            ],
            accounts: vec![account],
            categories: vec![food],
            ..Records::default()
        };

        let mut buffer = Vec::new();
        export_transactions_csv(&records, "%Y-%m-%d", &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID,Date,Type"));
        assert!(lines[1].contains(",Expense,Checking,Food,\"Pizza, large\",19.99,"));
        assert!(lines[2].contains(",Income,Checking,Uncategorized,,5000.00,"));
        assert!(lines[1].contains(",2025-03-01,"));

        let mut buffer = Vec::new();
        export_transactions_csv(&records, "%d.%m.%Y", &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains(",01.03.2025,"));
        assert!(!output.contains("2025-03-01"));
    }

    #[test]
    fn test_monthly_totals_csv() {
        let account = Account::new("Cash", AccountType::Cash);
        let txns = vec![
            Transaction::income(account.id, Money::from_cents(10000), date(2025, 1, 10)),
            Transaction::expense(account.id, Money::from_cents(2500), date(2025, 2, 10)),
        ];
        let months = [Month::new(2025, 1).unwrap(), Month::new(2025, 2).unwrap()];

        let mut buffer = Vec::new();
        export_monthly_totals_csv(&monthly_totals(&txns, &months), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "Month,Income,Expense,Net\n2025-01,100.00,0.00,100.00\n2025-02,0.00,25.00,-25.00\n"
        );
    }

    #[test]
    fn test_simulation_csv_rows() {
        let invest = InvestmentParams::new(1000.0, 100.0, 12.0, RateUnit::Annual)
            .over(12, PeriodUnit::Months);
        let mut buffer = Vec::new();
        export_investment_csv(&investment_trace(&invest), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 13);
        assert!(output.lines().last().unwrap().ends_with(",2396.65"));

        let loan = LoanParams::new(10000.0, 1.0, RateUnit::Monthly, 12, PeriodUnit::Months);
        let mut buffer = Vec::new();
        export_amortization_csv(&amortization_schedule(&loan), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.lines().nth(1).unwrap().starts_with("1,888.49,100.00,788.49,"));
        assert!(output.lines().last().unwrap().ends_with(",0.00"));
    }
}
