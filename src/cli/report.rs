//! CLI commands for reports
//!
//! Dashboard, budget progress, category breakdown, monthly trend and goals.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_breakdown_table, format_budget_table, format_dashboard, format_day, format_goal_table,
    format_trend_table,
};
use crate::error::{FinsightError, FinsightResult};
use crate::export::{export_report_json, export_report_yaml, ReportExport};
use crate::models::{last_n_months, Currency, Month, TransactionType};
use crate::reports::{category_breakdown, monthly_totals, DashboardOptions, DashboardSummary};
use crate::storage::Records;

use super::{parse_month, parse_transaction_type, OutputFormat};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the dashboard summary
    #[command(alias = "dash")]
    Dashboard {
        /// Month to summarize (YYYY-MM, defaults to the current month)
        #[arg(short, long, value_parser = parse_month)]
        month: Option<Month>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show progress of every budget
    Budgets,

    /// Show totals by category for a month
    Breakdown {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long, value_parser = parse_month)]
        month: Option<Month>,

        /// Transaction type to break down
        #[arg(
            short = 't',
            long = "type",
            default_value = "expense",
            value_parser = parse_transaction_type
        )]
        kind: TransactionType,
    },

    /// Show income and expense per month
    Trend {
        /// Number of months (defaults to the configured trend length)
        #[arg(short = 'n', long)]
        months: Option<usize>,

        /// Last month of the trend (YYYY-MM, defaults to the current month)
        #[arg(short, long, value_parser = parse_month)]
        end: Option<Month>,
    },

    /// Show savings goals
    Goals,
}

/// Handle a report command
pub fn handle_report_command(
    records: &Records,
    settings: &Settings,
    currency: Currency,
    today: NaiveDate,
    cmd: ReportCommands,
) -> FinsightResult<()> {
    match cmd {
        ReportCommands::Dashboard { month, format } => {
            let options = DashboardOptions::from(settings);
            match format {
                OutputFormat::Text => {
                    let month = month.unwrap_or_else(|| Month::of(today));
                    let summary =
                        DashboardSummary::generate_for_month(records, month, today, options);
                    print!("{}", format_dashboard(&summary, currency, &settings.date_format));
                }
                OutputFormat::Json | OutputFormat::Yaml => {
                    if month.is_some() {
                        return Err(FinsightError::Config(
                            "--month only works with text output; use --today for exports".into(),
                        ));
                    }
                    let report = ReportExport::generate(records, today, options, currency.code());
                    let mut stdout = std::io::stdout().lock();
                    if format == OutputFormat::Json {
                        export_report_json(&report, &mut stdout)?;
                    } else {
                        export_report_yaml(&report, &mut stdout)?;
                    }
                }
            }
        }

        ReportCommands::Budgets => {
            println!("Budgets as of {}", format_day(today, &settings.date_format));
            println!("{}", format_budget_table(records, today, currency));
        }

        ReportCommands::Breakdown { month, kind } => {
            let month = month.unwrap_or_else(|| Month::of(today));
            let in_month: Vec<_> = records
                .transactions
                .iter()
                .filter(|t| month.contains(t.date))
                .cloned()
                .collect();
            let breakdown = category_breakdown(&in_month, &records.categories, kind);
            let total = breakdown.iter().map(|s| s.total).sum();

            println!("{} by category - {}", kind, month.label());
            println!("{}", format_breakdown_table(&breakdown, currency));
            if !breakdown.is_empty() {
                println!("Total: {}", currency.format(total));
            }
        }

        ReportCommands::Trend { months, end } => {
            let count = months.unwrap_or(settings.trend_months);
            let end = end.unwrap_or_else(|| Month::of(today));
            let months = last_n_months(count, end.first_day());
            let trend = monthly_totals(&records.transactions, &months);

            println!("Monthly trend ({} months)", trend.len());
            println!("{}", format_trend_table(&trend, currency));
        }

        ReportCommands::Goals => {
            let table = format_goal_table(&records.goals, today, currency, &settings.date_format);
            println!("{}", table);
        }
    }

    Ok(())
}
