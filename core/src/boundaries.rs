//! Day and week projections of a timestamp
//!
//! Weekdays are numbered 1-7 with Sunday as 1, matching
//! [`CalendarFields::weekday`](crate::CalendarFields). Weeks start on
//! Sunday at 00:00.
//!
//! A week start before the epoch cannot be represented; instants in
//! 1970-01-01 through 1970-01-03 report the epoch as their week start.
//! Boundaries past `u32::MAX` saturate.

use tickclock_hal::Timestamp;

use crate::calendar::{weekday_of, SECS_PER_DAY, SECS_PER_WEEK};

/// Day of the week (1-7), Sunday is 1
pub fn day_of_week(t: Timestamp) -> u8 {
    weekday_of(t)
}

/// Whole days elapsed since the epoch
pub fn elapsed_days(t: Timestamp) -> u32 {
    t / SECS_PER_DAY
}

/// Seconds elapsed since the previous midnight
pub fn seconds_today(t: Timestamp) -> u32 {
    t % SECS_PER_DAY
}

/// Midnight at the start of the day containing `t`
pub fn prev_midnight(t: Timestamp) -> Timestamp {
    t - seconds_today(t)
}

/// Midnight at the end of the day containing `t`
pub fn next_midnight(t: Timestamp) -> Timestamp {
    t.saturating_add(SECS_PER_DAY - seconds_today(t))
}

/// Seconds elapsed since the start of the week (Sunday 00:00)
pub fn seconds_this_week(t: Timestamp) -> u32 {
    seconds_today(t) + u32::from(day_of_week(t) - 1) * SECS_PER_DAY
}

/// Sunday 00:00 at the start of the week containing `t`
pub fn prev_week_start(t: Timestamp) -> Timestamp {
    t.saturating_sub(seconds_this_week(t))
}

/// Sunday 00:00 at the end of the week containing `t`
pub fn next_week_start(t: Timestamp) -> Timestamp {
    t.saturating_add(SECS_PER_WEEK - seconds_this_week(t))
}
