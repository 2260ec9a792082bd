//! Calendar months and inclusive date ranges
//!
//! Every monthly aggregation goes through [`Month::range`] so that all views
//! agree on where a month starts and ends.

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate};
use std::fmt::Write as _;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on the months [`last_n_months`] will produce
pub const MAX_MONTHS_BACK: usize = 1200;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range; the bounds are swapped if given in the wrong order
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Check if a date falls within this range (bounds included)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, bounds included
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// January 1 to December 31 of a year
    pub fn year(year: i32) -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// A calendar month (month is 1-based, 1 = January)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonth")]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

#[derive(Deserialize)]
struct RawMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonth> for Month {
    type Error = PeriodParseError;

    fn try_from(raw: RawMonth) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month).ok_or(PeriodParseError::InvalidMonth(raw.month))
    }
}

impl Month {
    /// Create a month; returns None for a month outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Create a month from a 0-based month index.
    ///
    /// Indices outside 0..=11 roll across year boundaries, so `-1` is December
    /// of the previous year and `12` is January of the next one.
    pub fn from_index(year: i32, month_index: i32) -> Self {
        Self {
            year: year + month_index.div_euclid(12),
            month: month_index.rem_euclid(12) as u32 + 1,
        }
    }

    /// The month containing a date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// 0-based month index (0 = January)
    pub fn index(&self) -> i32 {
        self.month as i32 - 1
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MIN)
    }

    /// Inclusive first-to-last-day range
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.first_day(),
            end: self.last_day(),
        }
    }

    /// Number of days in the month
    pub fn days(&self) -> u32 {
        self.last_day().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        Self::from_index(self.year, self.index() + 1)
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        Self::from_index(self.year, self.index() - 1)
    }

    /// Short label such as "Jan 2025", used on chart axes
    pub fn label(&self) -> String {
        format!(
            "{} {}",
            MONTH_ABBREVIATIONS[self.index().rem_euclid(12) as usize],
            self.year
        )
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        Self::new(year, month).ok_or(PeriodParseError::InvalidMonth(month))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Inclusive first/last day bounds for a month given a 0-based index
pub fn month_range(year: i32, month_index: i32) -> DateRange {
    Month::from_index(year, month_index).range()
}

/// The `n` most recent months ending at the reference date's month, oldest first.
///
/// `n` is capped at [`MAX_MONTHS_BACK`].
pub fn last_n_months(n: usize, reference: NaiveDate) -> Vec<Month> {
    let current = Month::of(reference);
    (0..n.min(MAX_MONTHS_BACK) as i32)
        .rev()
        .map(|back| Month::from_index(current.year, current.index() - back))
        .collect()
}

/// Render a date with a strftime pattern.
///
/// Returns None when the pattern is malformed or asks for fields a date
/// does not have (such as `%H`).
pub fn format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let items: Vec<Item> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", date.format_with_items(items.iter())).ok()?;
    Some(out)
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodParseError {
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_range() {
        let range = month_range(2025, 0);
        assert_eq!(range.start, date(2025, 1, 1));
        assert_eq!(range.end, date(2025, 1, 31));

        let feb_leap = month_range(2024, 1);
        assert_eq!(feb_leap.end, date(2024, 2, 29));
    }

    #[test]
    fn test_month_index_rolls_back_across_year() {
        let range = month_range(2025, -1);
        assert_eq!(range.start, date(2024, 12, 1));
        assert_eq!(range.end, date(2024, 12, 31));

        assert_eq!(Month::from_index(2025, 12), Month::new(2026, 1).unwrap());
        assert_eq!(Month::from_index(2025, -13), Month::new(2023, 12).unwrap());
    }

    #[test]
    fn test_last_n_months_oldest_first() {
        let months = last_n_months(3, date(2025, 2, 14));
        let rendered: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(rendered, vec!["2024-12", "2025-01", "2025-02"]);
    }

    #[test]
    fn test_last_n_months_is_restartable() {
        let reference = date(2025, 6, 30);
        assert_eq!(last_n_months(6, reference), last_n_months(6, reference));
        assert!(last_n_months(0, reference).is_empty());
    }

    #[test]
    fn test_navigation() {
        let dec = Month::new(2024, 12).unwrap();
        assert_eq!(dec.next(), Month::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn test_contains_and_days() {
        let jan = Month::new(2025, 1).unwrap();
        assert!(jan.contains(date(2025, 1, 31)));
        assert!(!jan.contains(date(2025, 2, 1)));
        assert_eq!(jan.days(), 31);
        assert_eq!(jan.range().days(), 31);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Month::parse("2025-03").unwrap().to_string(), "2025-03");
        assert_eq!(
            Month::parse("2025-13").unwrap_err(),
            PeriodParseError::InvalidMonth(13)
        );
        assert!(Month::parse("March").is_err());
        assert_eq!(Month::new(2025, 3).unwrap().label(), "Mar 2025");
    }

    #[test]
    fn test_last_n_months_is_capped() {
        let reference = date(2025, 6, 30);
        let months = last_n_months(usize::MAX, reference);
        assert_eq!(months.len(), MAX_MONTHS_BACK);
        assert_eq!(*months.last().unwrap(), Month::of(reference));
        assert!(months.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_deserialize_rejects_invalid_month() {
        let err = serde_json::from_str::<Month>(r#"{"year":2025,"month":0}"#);
        assert!(err.is_err());
        assert!(serde_json::from_str::<Month>(r#"{"year":2025,"month":13}"#).is_err());

        let month: Month = serde_json::from_str(r#"{"year":2025,"month":3}"#).unwrap();
        assert_eq!(month.label(), "Mar 2025");
    }

    #[test]
    fn test_label_never_panics_on_out_of_range_month() {
        let month = Month { year: 2025, month: 0 };
        assert_eq!(month.label(), "Dec 2025");
    }

    #[test]
    fn test_format_date() {
        let day = date(2025, 3, 7);
        assert_eq!(format_date(day, "%Y-%m-%d").as_deref(), Some("2025-03-07"));
        assert_eq!(format_date(day, "%d/%m/%Y").as_deref(), Some("07/03/2025"));
        assert_eq!(format_date(day, "%Q"), None);
        assert_eq!(format_date(day, "%H:%M"), None);
    }

    #[test]
    fn test_year_range() {
        let year = DateRange::year(2024);
        assert_eq!(year.days(), 366);
        assert!(year.contains(date(2024, 12, 31)));
    }
}
