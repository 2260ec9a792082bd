//! Supported currencies and display formatting
//!
//! Formatting always renders exactly two fraction digits. Decimal amounts are
//! rounded through [`Money::from_decimal`] (half away from zero), so every
//! formatting call site agrees to the cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Maximum number of digits accepted by [`parse_currency_input`]; further
/// keystrokes are ignored so the value stays inside `i64` cents.
pub const MAX_INPUT_DIGITS: usize = 15;

/// A currency the formatter knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Brazilian real (fallback for unknown codes)
    #[default]
    Brl,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cny,
    Aud,
    Cad,
}

/// Where the symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPlacement {
    Prefix,
    PrefixSpaced,
    SuffixSpaced,
}

impl Currency {
    /// Every supported currency, in display order
    pub const ALL: [Currency; 8] = [
        Self::Brl,
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Cny,
        Self::Aud,
        Self::Cad,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Brl => "BRL",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cny => "CNY",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Brl => "R$",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Cny => "CN¥",
            Self::Aud => "A$",
            Self::Cad => "CA$",
        }
    }

    fn separators(&self) -> (char, char) {
        match self {
            Self::Brl | Self::Eur => ('.', ','),
            _ => (',', '.'),
        }
    }

    fn placement(&self) -> SymbolPlacement {
        match self {
            Self::Brl => SymbolPlacement::PrefixSpaced,
            Self::Eur => SymbolPlacement::SuffixSpaced,
            _ => SymbolPlacement::Prefix,
        }
    }

    /// Look up a currency by ISO code, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// Look up a currency by ISO code, falling back to BRL
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// Format the magnitude of an amount with grouping and decimal separators
    /// but no symbol or sign (e.g. "1.234,56" for BRL)
    pub fn format_number(&self, amount: Money) -> String {
        let (group_sep, decimal_sep) = self.separators();
        let abs = amount.abs();
        format!(
            "{}{}{:02}",
            group_digits(abs.units().unsigned_abs(), group_sep),
            decimal_sep,
            abs.cents_part()
        )
    }

    /// Format an amount with this currency's symbol
    pub fn format(&self, amount: Money) -> String {
        let number = self.format_number(amount);
        let sign = if amount.is_negative() { "-" } else { "" };
        let symbol = self.symbol();
        match self.placement() {
            SymbolPlacement::Prefix => format!("{}{}{}", sign, symbol, number),
            SymbolPlacement::PrefixSpaced => format!("{}{} {}", sign, symbol, number),
            SymbolPlacement::SuffixSpaced => format!("{}{} {}", sign, number, symbol),
        }
    }

    /// Interpret free-form typed text as a stream of digits in cents
    pub fn parse_input(&self, raw: &str) -> CurrencyInput {
        let digits: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(MAX_INPUT_DIGITS)
            .collect();

        if digits.is_empty() {
            return CurrencyInput {
                value: Money::zero(),
                display: String::new(),
            };
        }

        // At most 15 ASCII digits always fit in i64
        let cents = digits.parse::<i64>().unwrap_or_default();
        let value = Money::from_cents(cents);
        CurrencyInput {
            value,
            display: self.format_number(value),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = UnsupportedCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedCurrency(s.to_string()))
    }
}

/// Error for currency codes outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported currency code: {0}")]
pub struct UnsupportedCurrency(pub String);

/// Result of interpreting typed currency text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyInput {
    /// Parsed amount
    pub value: Money,
    /// Re-formatted text to show back in the input field
    pub display: String,
}

/// Render a decimal amount as a currency string.
///
/// Unknown codes fall back to BRL. The amount is rounded to two fraction
/// digits, halves away from zero.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    format_money(Money::from_decimal(amount), currency_code)
}

/// Render an exact amount as a currency string (unknown codes fall back to BRL)
pub fn format_money(amount: Money, currency_code: &str) -> String {
    Currency::from_code_or_default(currency_code).format(amount)
}

/// Interpret typed text using the default currency's separators.
///
/// Every digit typed so far is read as cents: "1" is 0,01, "12" is 0,12,
/// "12,5" is 1,25. Non-digit characters are dropped.
pub fn parse_currency_input(raw: &str) -> CurrencyInput {
    Currency::default().parse_input(raw)
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_each_supported_currency() {
        let amount = Money::from_cents(123456);
        assert_eq!(Currency::Brl.format(amount), "R$ 1.234,56");
        assert_eq!(Currency::Usd.format(amount), "$1,234.56");
        assert_eq!(Currency::Eur.format(amount), "1.234,56 €");
        assert_eq!(Currency::Gbp.format(amount), "£1,234.56");
        assert_eq!(Currency::Jpy.format(amount), "¥1,234.56");
        assert_eq!(Currency::Cny.format(amount), "CN¥1,234.56");
        assert_eq!(Currency::Aud.format(amount), "A$1,234.56");
        assert_eq!(Currency::Cad.format(amount), "CA$1,234.56");
    }

    #[test]
    fn test_format_negative_and_small() {
        assert_eq!(Currency::Brl.format(Money::from_cents(-5)), "-R$ 0,05");
        assert_eq!(Currency::Eur.format(Money::from_cents(-100)), "-1,00 €");
        assert_eq!(
            Currency::Usd.format(Money::from_cents(123456789012)),
            "$1,234,567,890.12"
        );
    }

    #[test]
    fn test_format_currency_falls_back_to_brl() {
        assert_eq!(format_currency(10.0, "XYZ"), "R$ 10,00");
        assert_eq!(format_currency(10.0, ""), "R$ 10,00");
        assert_eq!(format_currency(10.0, "usd"), "$10.00");
    }

    #[test]
    fn test_format_currency_rounding_rule() {
        assert_eq!(format_currency(10.125, "USD"), "$10.13");
        assert_eq!(format_currency(-10.125, "USD"), "-$10.13");
        assert_eq!(format_currency(0.004, "USD"), "$0.00");
    }

    #[test]
    fn test_parse_input_progressive_typing() {
        let steps = [
            ("1", 1, "0,01"),
            ("12", 12, "0,12"),
            ("12,", 12, "0,12"),
            ("12,5", 125, "1,25"),
            ("1,250", 1250, "12,50"),
            ("12,500", 12500, "125,00"),
        ];
        for (raw, cents, display) in steps {
            let parsed = parse_currency_input(raw);
            assert_eq!(parsed.value.cents(), cents, "input {raw}");
            assert_eq!(parsed.display, display, "input {raw}");
        }
    }

    #[test]
    fn test_parse_input_strips_noise() {
        let parsed = parse_currency_input("R$ 1.234,56abc");
        assert_eq!(parsed.value.cents(), 123456);
        assert_eq!(parsed.display, "1.234,56");

        let usd = Currency::Usd.parse_input("$1,234.56");
        assert_eq!(usd.display, "1,234.56");
    }

    #[test]
    fn test_parse_input_empty_and_overflow() {
        let empty = parse_currency_input("abc");
        assert_eq!(empty.value, Money::zero());
        assert_eq!(empty.display, "");

        let long = parse_currency_input(&"9".repeat(40));
        assert_eq!(long.value.cents(), 999_999_999_999_999);
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!("gbp".parse::<Currency>().unwrap(), Currency::Gbp);
        assert!("XYZ".parse::<Currency>().is_err());
        assert_eq!(Currency::from_code_or_default("nope"), Currency::Brl);
        assert_eq!(serde_json::to_string(&Currency::Jpy).unwrap(), "\"JPY\"");
    }
}
