use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finsight::cli::{
    handle_config_command, handle_currency_command, handle_export_command, handle_report_command,
    handle_simulate_command, parse_currency, parse_date, ConfigCommands, CurrencyCommands,
    ExportCommands, ReportCommands, SimulateCommands,
};
use finsight::clock::{Clock, SystemClock};
use finsight::config::{paths::FinsightPaths, settings::Settings};
use finsight::export::{import_records_yaml, RecordsExport};
use finsight::logging::init_tracing;
use finsight::models::Currency;
use finsight::storage::{initialize_storage, JsonStore, RecordStore};

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Personal finance reports and compound growth projections",
    long_about = "Finsight summarizes income, expenses, budgets and savings goals \
                  from your records, and projects investment growth and loan \
                  amortization from the command line."
)]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Currency for amounts (ISO code, overrides the configured default)
    #[arg(long, global = true, value_parser = parse_currency)]
    currency: Option<Currency>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Investment and loan simulations
    #[command(subcommand, alias = "sim")]
    Simulate(SimulateCommands),

    #[command(flatten)]
    Currency(CurrencyCommands),

    /// Export reports and records
    #[command(subcommand)]
    Export(ExportCommands),

    /// Replace stored records with an exported JSON or YAML file
    Import {
        /// File produced by `export records`
        file: PathBuf,
    },

    /// Initialize the data directory
    Init,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = FinsightPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let currency = cli.currency.unwrap_or_else(|| settings.currency());
    let today = cli.today.unwrap_or_else(|| SystemClock.today());

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Finsight - personal finance reports and projections");
            println!();
            println!("Run 'finsight --help' for usage information.");
            println!("Run 'finsight init' to create the data directory.");
            return Ok(());
        }
    };

    match command {
        Commands::Simulate(cmd) => handle_simulate_command(currency, cmd)?,
        Commands::Currency(cmd) => handle_currency_command(currency, cmd)?,
        Commands::Config { command } => handle_config_command(&paths, &mut settings, command)?,
        Commands::Init => {
            println!("Initializing Finsight at: {}", paths.base_dir().display());
            if initialize_storage(&paths)? {
                println!("Initialization complete!");
                println!();
                println!("Default income and expense categories have been created.");
                println!("Run 'finsight config' to review settings.");
            } else {
                println!("Already initialized; nothing changed.");
            }
        }
        Commands::Import { file } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let is_yaml = file
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

            let records = if is_yaml {
                import_records_yaml(&contents)?
            } else {
                serde_json::from_str::<RecordsExport>(&contents)
                    .context("Failed to parse records export")?
                    .into_records()?
            };

            JsonStore::new(paths.clone()).save(&records)?;
            println!(
                "Imported {} transactions, {} accounts, {} categories, {} budgets, {} goals",
                records.transactions.len(),
                records.accounts.len(),
                records.categories.len(),
                records.budgets.len(),
                records.goals.len()
            );
        }
        Commands::Report(cmd) => {
            let records = JsonStore::new(paths.clone()).snapshot()?;
            if let Err(e) = records.validate() {
                tracing::warn!(error = %e, "Stored records failed validation");
            }
            handle_report_command(&records, &settings, currency, today, cmd)?;
        }
        Commands::Export(cmd) => {
            let records = JsonStore::new(paths.clone()).snapshot()?;
            if let Err(e) = records.validate() {
                tracing::warn!(error = %e, "Stored records failed validation");
            }
            handle_export_command(&records, &settings, currency, today, cmd)?;
        }
    }

    Ok(())
}
