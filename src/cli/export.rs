//! CLI commands for exporting reports and records

use chrono::NaiveDate;
use clap::Subcommand;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{FinsightError, FinsightResult};
use crate::export::{
    export_monthly_totals_csv, export_records_json, export_records_yaml, export_report_json,
    export_report_yaml, export_transactions_csv, ReportExport,
};
use crate::models::{last_n_months, Currency, Month};
use crate::reports::{monthly_totals, DashboardOptions};
use crate::storage::Records;

use super::{parse_month, DataFormat};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Dashboard report with budget and goal progress
    Report {
        #[arg(short, long, value_enum, default_value_t = DataFormat::Json)]
        format: DataFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Every record, for backup or transfer
    Records {
        #[arg(short, long, value_enum, default_value_t = DataFormat::Json)]
        format: DataFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// All transactions as CSV
    Transactions {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Monthly income/expense totals as CSV
    Trend {
        /// Number of months (defaults to the configured trend length)
        #[arg(short = 'n', long)]
        months: Option<usize>,

        /// Last month (YYYY-MM, defaults to the current month)
        #[arg(short, long, value_parser = parse_month)]
        end: Option<Month>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn open_output(output: &Option<PathBuf>) -> FinsightResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinsightError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

fn report_written(output: &Option<PathBuf>) {
    if let Some(path) = output {
        eprintln!("Exported to {}", path.display());
    }
}

/// Handle an export command
pub fn handle_export_command(
    records: &Records,
    settings: &Settings,
    currency: Currency,
    today: NaiveDate,
    cmd: ExportCommands,
) -> FinsightResult<()> {
    match cmd {
        ExportCommands::Report { format, output } => {
            let options = DashboardOptions::from(settings);
            let report = ReportExport::generate(records, today, options, currency.code());
            let mut writer = open_output(&output)?;
            match format {
                DataFormat::Json => export_report_json(&report, &mut writer)?,
                DataFormat::Yaml => export_report_yaml(&report, &mut writer)?,
            }
            writer.flush()?;
            report_written(&output);
        }

        ExportCommands::Records { format, output } => {
            let mut writer = open_output(&output)?;
            match format {
                DataFormat::Json => export_records_json(records, &mut writer)?,
                DataFormat::Yaml => export_records_yaml(records, &mut writer)?,
            }
            writer.flush()?;
            report_written(&output);
        }

        ExportCommands::Transactions { output } => {
            export_transactions_csv(records, &settings.date_format, open_output(&output)?)?;
            report_written(&output);
        }

        ExportCommands::Trend { months, end, output } => {
            let count = months.unwrap_or(settings.trend_months);
            let end = end.unwrap_or_else(|| Month::of(today));
            let months = last_n_months(count, end.first_day());
            let trend = monthly_totals(&records.transactions, &months);
            export_monthly_totals_csv(&trend, open_output(&output)?)?;
            report_written(&output);
        }
    }

    tracing::debug!("Export finished");
    Ok(())
}
