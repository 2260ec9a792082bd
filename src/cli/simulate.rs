//! CLI commands for the compound growth simulators

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::display::{format_amortization_table, format_decimal, format_investment_table};
use crate::error::{FinsightError, FinsightResult};
use crate::export::{export_amortization_csv, export_investment_csv};
use crate::models::Currency;
use crate::simulation::{
    amortization_schedule, investment_growth, investment_trace, loan_amortization,
    InvestmentParams, LoanParams, PeriodUnit, RateUnit,
};

use super::{parse_amount, parse_period_unit, parse_rate_unit};

/// Simulation subcommands
#[derive(Subcommand, Debug)]
pub enum SimulateCommands {
    /// Project the growth of an investment with monthly contributions
    #[command(alias = "investment")]
    Invest {
        /// Starting amount
        #[arg(short, long, default_value = "0", value_parser = parse_amount)]
        initial: f64,

        /// Amount added at the start of every month
        #[arg(short, long, default_value = "0", value_parser = parse_amount)]
        monthly: f64,

        /// Interest rate in percent
        #[arg(short, long, allow_hyphen_values = true)]
        rate: f64,

        /// Whether the rate is per year or per month
        #[arg(long, default_value = "annual", value_parser = parse_rate_unit)]
        rate_unit: RateUnit,

        /// Length of the projection
        #[arg(short, long, allow_hyphen_values = true)]
        period: i64,

        /// Unit of the period
        #[arg(long, default_value = "months", value_parser = parse_period_unit)]
        period_unit: PeriodUnit,

        /// Print the month-by-month table
        #[arg(long)]
        table: bool,

        /// Write the month-by-month trace to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Solve the fixed monthly payment of a loan
    Loan {
        /// Amount borrowed
        #[arg(short = 'a', long, value_parser = parse_amount)]
        principal: f64,

        /// Interest rate in percent
        #[arg(short, long, allow_hyphen_values = true)]
        rate: f64,

        /// Whether the rate is per year or per month
        #[arg(long, default_value = "annual", value_parser = parse_rate_unit)]
        rate_unit: RateUnit,

        /// Length of the loan
        #[arg(short, long, allow_hyphen_values = true)]
        period: i64,

        /// Unit of the period
        #[arg(long, default_value = "months", value_parser = parse_period_unit)]
        period_unit: PeriodUnit,

        /// Print the amortization schedule
        #[arg(long)]
        table: bool,

        /// Write the amortization schedule to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn create_csv(path: &Path) -> FinsightResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| FinsightError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

/// Handle a simulation command
pub fn handle_simulate_command(currency: Currency, cmd: SimulateCommands) -> FinsightResult<()> {
    match cmd {
        SimulateCommands::Invest {
            initial,
            monthly,
            rate,
            rate_unit,
            period,
            period_unit,
            table,
            csv,
        } => {
            let params =
                InvestmentParams::new(initial, monthly, rate, rate_unit).over(period, period_unit);
            let result = investment_growth(&params);

            println!("Investment projection");
            println!("{}", "=".repeat(40));
            println!(
                "Rate:             {}% {} ({:.4}% per month)",
                rate,
                rate_unit,
                result.monthly_rate * 100.0
            );
            println!("Months:           {}", result.months);
            println!("Total invested:   {}", format_decimal(result.total_invested, currency));
            println!("Interest earned:  {}", format_decimal(result.interest_earned, currency));
            println!("Future value:     {}", format_decimal(result.future_value, currency));

            if !result.valid {
                println!();
                println!("Parameters are invalid; results are zeroed.");
                return Ok(());
            }

            if !table && csv.is_none() {
                return Ok(());
            }
            let trace = investment_trace(&params);
            if table {
                println!();
                println!("{}", format_investment_table(&trace, currency));
            }
            if let Some(path) = csv {
                export_investment_csv(&trace, create_csv(&path)?)?;
                println!("Trace written to {}", path.display());
            }
        }

        SimulateCommands::Loan {
            principal,
            rate,
            rate_unit,
            period,
            period_unit,
            table,
            csv,
        } => {
            let params = LoanParams::new(principal, rate, rate_unit, period, period_unit);
            let result = loan_amortization(&params);

            println!("Loan amortization");
            println!("{}", "=".repeat(40));
            println!("Principal:        {}", format_decimal(principal, currency));
            println!(
                "Rate:             {}% {} ({:.4}% per month)",
                rate,
                rate_unit,
                result.monthly_rate * 100.0
            );
            println!("Months:           {}", result.months);
            println!("Monthly payment:  {}", format_decimal(result.monthly_payment, currency));
            println!("Total paid:       {}", format_decimal(result.total_payment, currency));
            println!("Total interest:   {}", format_decimal(result.total_interest, currency));

            if !result.valid {
                println!();
                println!("Parameters are invalid; results are zeroed.");
                return Ok(());
            }

            if !table && csv.is_none() {
                return Ok(());
            }
            let schedule = amortization_schedule(&params);
            if table {
                println!();
                println!("{}", format_amortization_table(&schedule, currency));
            }
            if let Some(path) = csv {
                export_amortization_csv(&schedule, create_csv(&path)?)?;
                println!("Schedule written to {}", path.display());
            }
        }
    }

    Ok(())
}
