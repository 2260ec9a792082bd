//! CLI commands for configuration

use clap::Subcommand;

use crate::config::paths::FinsightPaths;
use crate::config::settings::Settings;
use crate::error::FinsightResult;

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,

    /// Change a setting
    Set {
        /// Setting key (default_currency, top_transactions, trend_months,
        /// average_daily_basis, date_format)
        key: String,

        /// New value
        value: String,
    },
}

/// Print paths and settings
pub fn print_config(paths: &FinsightPaths, settings: &Settings) {
    println!("Finsight Configuration");
    println!("======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!("Initialized:      {}", if paths.is_initialized() { "yes" } else { "no" });
    println!();
    println!("Settings:");
    println!("  default_currency:    {}", settings.default_currency);
    println!("  top_transactions:    {}", settings.top_transactions);
    println!("  trend_months:        {}", settings.trend_months);
    println!("  average_daily_basis: {}", settings.average_daily_basis);
    println!("  date_format:         {}", settings.date_format);
}

/// Handle a configuration command
pub fn handle_config_command(
    paths: &FinsightPaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> FinsightResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => print_config(paths, settings),
        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            tracing::info!(key = %key, "Setting updated");
            println!("Set {} = {}", key, value);
        }
    }
    Ok(())
}
