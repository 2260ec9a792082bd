//! Report formatting utilities for terminal output

use chrono::NaiveDate;

use crate::models::{format_date, Currency, Money};
use crate::reports::PeriodChange;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 0.1 && pct != 0.0 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a period change, with an arrow for the direction
pub fn format_change(change: PeriodChange) -> String {
    match change {
        PeriodChange::Percent(p) if p > 0.0 => format!("▲ {}", change.label()),
        PeriodChange::Percent(p) if p < 0.0 => format!("▼ {}", change.label()),
        _ => change.label(),
    }
}

/// Format a date with the configured pattern, falling back to ISO 8601
pub fn format_day(date: NaiveDate, pattern: &str) -> String {
    format_date(date, pattern).unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
}

/// Format a simulated decimal amount in a currency
pub fn format_decimal(amount: f64, currency: Currency) -> String {
    currency.format(Money::from_decimal(amount))
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 || !value.is_finite() {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day_uses_pattern_or_iso() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_day(day, "%d/%m/%Y"), "07/03/2025");
        assert_eq!(format_day(day, "%H:%M"), "2025-03-07");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
        assert_eq!(format_percentage(-2.34), "-2.3%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(PeriodChange::New), "New");
        assert_eq!(format_change(PeriodChange::Zero), "0.0%");
        assert_eq!(format_change(PeriodChange::Percent(12.5)), "▲ +12.5%");
        assert_eq!(format_change(PeriodChange::Percent(-40.0)), "▼ -40.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Açúcar e café", 8), "Açúca...");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(2396.64979, Currency::Usd), "$2,396.65");
        assert_eq!(format_decimal(f64::NAN, Currency::Brl), "R$ 0,00");
    }
}
