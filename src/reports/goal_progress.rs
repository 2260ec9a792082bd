//! Savings goal progress

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Goal, GoalId, Money};

/// Progress towards one savings goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    /// Saved share of the target, clamped to 0..=100
    pub percentage: f64,
    /// Amount still missing, never negative
    pub remaining: Money,
    pub is_complete: bool,
    /// Calendar months left until the deadline, counting the current one.
    /// `None` without a deadline, `Some(0)` once the deadline has passed.
    pub months_remaining: Option<u32>,
    /// Saving needed per month to hit the deadline (rounded up to the cent)
    pub monthly_needed: Money,
}

/// Compute progress for a goal as of `today`
pub fn goal_progress(goal: &Goal, today: NaiveDate) -> GoalProgress {
    let remaining = (goal.target_amount - goal.current_amount).non_negative();

    let percentage = if goal.target_amount.is_positive() {
        let raw = (goal.current_amount.cents() as f64 * 100.0) / goal.target_amount.cents() as f64;
        raw.clamp(0.0, 100.0)
    } else {
        0.0
    };

    let months_remaining = goal.deadline.map(|deadline| months_until(today, deadline));

    let monthly_needed = match months_remaining {
        Some(months) if months > 0 && remaining.is_positive() => {
            let months = i64::from(months);
            Money::from_cents((remaining.cents() + months - 1) / months)
        }
        _ => Money::zero(),
    };

    GoalProgress {
        goal_id: goal.id,
        percentage,
        remaining,
        is_complete: goal.is_complete(),
        months_remaining,
        monthly_needed,
    }
}

fn months_until(today: NaiveDate, deadline: NaiveDate) -> u32 {
    if deadline < today {
        return 0;
    }
    let months =
        (deadline.year() - today.year()) * 12 + deadline.month() as i32 - today.month() as i32;
    (months + 1).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progress_without_deadline() {
        let goal = Goal::new("Emergency fund", Money::from_cents(1000000))
            .with_current(Money::from_cents(250000));
        let progress = goal_progress(&goal, date(2025, 1, 1));
        assert_eq!(progress.percentage, 25.0);
        assert_eq!(progress.remaining.cents(), 750000);
        assert!(!progress.is_complete);
        assert_eq!(progress.months_remaining, None);
        assert_eq!(progress.monthly_needed, Money::zero());
    }

    #[test]
    fn test_progress_clamps_when_exceeded() {
        let goal = Goal::new("Phone", Money::from_cents(100000))
            .with_current(Money::from_cents(150000));
        let progress = goal_progress(&goal, date(2025, 1, 1));
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, Money::zero());
        assert!(progress.is_complete);
    }

    #[test]
    fn test_monthly_needed_rounds_up() {
        let goal = Goal::new("Trip", Money::from_cents(100000))
            .with_deadline(date(2025, 3, 15));
        let progress = goal_progress(&goal, date(2025, 1, 20));
        // January, February, March
        assert_eq!(progress.months_remaining, Some(3));
        assert_eq!(progress.monthly_needed.cents(), 33334);
    }

    #[test]
    fn test_deadline_this_month_and_passed() {
        let goal = Goal::new("Gift", Money::from_cents(5000)).with_deadline(date(2025, 1, 31));
        let this_month = goal_progress(&goal, date(2025, 1, 10));
        assert_eq!(this_month.months_remaining, Some(1));
        assert_eq!(this_month.monthly_needed.cents(), 5000);

        let passed = goal_progress(&goal, date(2025, 2, 1));
        assert_eq!(passed.months_remaining, Some(0));
        assert_eq!(passed.monthly_needed, Money::zero());
    }
}
