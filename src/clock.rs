//! Injectable "now"
//!
//! Engine functions take the reference date as a plain `NaiveDate` argument.
//! Only the outermost layer (the CLI, or an embedding application) reads the
//! system clock, through this trait.

use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so reports stay deterministic in tests.
pub trait Clock {
    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
