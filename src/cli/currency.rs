//! CLI commands for currency formatting and amount input

use clap::Subcommand;

use crate::error::FinsightResult;
use crate::models::Currency;

/// Currency utility subcommands
#[derive(Subcommand, Debug)]
pub enum CurrencyCommands {
    /// Format a decimal amount in a currency
    Format {
        /// Amount, with '.' as the decimal point
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Interpret typed text as an amount (every digit read as cents)
    #[command(name = "parse-amount")]
    ParseAmount {
        /// Text as typed, e.g. "12,5" or "R$ 1.234,56"
        text: String,
    },
}

/// Handle a currency utility command
pub fn handle_currency_command(currency: Currency, cmd: CurrencyCommands) -> FinsightResult<()> {
    match cmd {
        CurrencyCommands::Format { amount } => {
            println!("{}", crate::models::format_currency(amount, currency.code()));
        }
        CurrencyCommands::ParseAmount { text } => {
            let input = currency.parse_input(&text);
            println!("Display: {}", input.display);
            println!("Value:   {}", input.value);
        }
    }
    Ok(())
}
