//! Interval updater
//!
//! A fixed three-branch heuristic, deliberately simpler than SM-2:
//! - hard → the interval resets to 1 day
//! - good → the interval is kept as-is
//! - easy → the interval doubles
//!
//! The next review is always `now + interval` days. There is no memory of
//! review history beyond the current interval, and no upper bound: repeated
//! "easy" outcomes grow the interval exponentially.

use chrono::{DateTime, Duration, Utc};

use super::models::ReviewOutcome;

/// Result of applying a review outcome to a card's schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleUpdate {
    /// New interval in days, always >= 1
    pub interval_days: i64,
    /// New due instant: `now + interval_days` days
    pub next_review: DateTime<Utc>,
}

/// Compute the next interval and due instant for a reviewed card
///
/// Pure function of the current interval, the outcome and the clock reading;
/// safe to call speculatively (e.g. for previews).
pub fn apply_outcome(
    interval_days: i64,
    outcome: ReviewOutcome,
    now: DateTime<Utc>,
) -> ScheduleUpdate {
    let interval_days = match outcome {
        ReviewOutcome::Hard => 1,
        ReviewOutcome::Good => interval_days.max(1),
        ReviewOutcome::Easy => interval_days.max(1) * 2,
    };

    ScheduleUpdate {
        interval_days,
        next_review: now + Duration::days(interval_days),
    }
}

/// Intervals each outcome would produce, for display next to the buttons
pub fn preview_intervals(interval_days: i64, now: DateTime<Utc>) -> [i64; 3] {
    [
        apply_outcome(interval_days, ReviewOutcome::Hard, now).interval_days,
        apply_outcome(interval_days, ReviewOutcome::Good, now).interval_days,
        apply_outcome(interval_days, ReviewOutcome::Easy, now).interval_days,
    ]
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i64) -> String {
    if days == 1 {
        "1d".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        let weeks = days / 7;
        if weeks == 1 {
            "1w".to_string()
        } else {
            format!("{}w", weeks)
        }
    } else if days < 365 {
        let months = days / 30;
        if months == 1 {
            "1mo".to_string()
        } else {
            format!("{}mo", months)
        }
    } else {
        let years = days / 365;
        if years == 1 {
            "1y".to_string()
        } else {
            format!("{}y", years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const DAY_MS: i64 = 86_400_000;

    #[test]
    fn test_hard_resets_to_one_day() {
        let now = Utc::now();
        let update = apply_outcome(16, ReviewOutcome::Hard, now);

        assert_eq!(update.interval_days, 1);
        assert_eq!((update.next_review - now).num_milliseconds(), DAY_MS);
    }

    #[test]
    fn test_good_keeps_interval_but_advances_due_date() {
        let now = Utc::now();
        let update = apply_outcome(5, ReviewOutcome::Good, now);

        assert_eq!(update.interval_days, 5);
        assert_eq!((update.next_review - now).num_days(), 5);
    }

    #[test]
    fn test_easy_doubles_interval() {
        let now = Utc::now();
        let update = apply_outcome(4, ReviewOutcome::Easy, now);

        assert_eq!(update.interval_days, 8);
        assert_eq!((update.next_review - now).num_days(), 8);
    }

    #[test]
    fn test_interval_never_below_one() {
        let now = Utc::now();
        for outcome in [ReviewOutcome::Hard, ReviewOutcome::Good, ReviewOutcome::Easy] {
            // A degenerate zero interval must still come out >= 1
            assert!(apply_outcome(0, outcome, now).interval_days >= 1);
        }
    }

    #[test]
    fn test_easy_growth_is_unbounded() {
        let now = Utc::now();
        let mut interval = 1;
        for _ in 0..20 {
            interval = apply_outcome(interval, ReviewOutcome::Easy, now).interval_days;
        }
        // 2^20 days; deliberately no cap
        assert_eq!(interval, 1 << 20);
    }

    #[test]
    fn test_preview_intervals() {
        assert_eq!(preview_intervals(6, Utc::now()), [1, 6, 12]);
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(1), "1d");
        assert_eq!(format_interval(5), "5d");
        assert_eq!(format_interval(7), "1w");
        assert_eq!(format_interval(14), "2w");
        assert_eq!(format_interval(30), "1mo");
        assert_eq!(format_interval(90), "3mo");
        assert_eq!(format_interval(365), "1y");
        assert_eq!(format_interval(730), "2y");
    }
}
