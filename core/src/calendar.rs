//! Calendar date/time conversions
//!
//! Converts between 32-bit Unix timestamps and broken-down calendar fields
//! in the proleptic Gregorian calendar, UTC only.
//!
//! Decoding walks forward from 1970 one year at a time, then one month at
//! a time; for a `u32` timestamp that is at most 136 years plus 11 months.
//!
//! Valid range: 1970-01-01T00:00:00Z (`0`) through 2106-02-07T06:28:15Z
//! (`u32::MAX`).

use tickclock_hal::Timestamp;

use crate::error::TimeError;

/// Seconds in one minute
pub const SECS_PER_MINUTE: u32 = 60;
/// Seconds in one hour
pub const SECS_PER_HOUR: u32 = 3600;
/// Seconds in one day
pub const SECS_PER_DAY: u32 = 86_400;
/// Days in one week
pub const DAYS_PER_WEEK: u32 = 7;
/// Seconds in one week
pub const SECS_PER_WEEK: u32 = SECS_PER_DAY * DAYS_PER_WEEK;
/// Timestamp of 2000-01-01T00:00:00Z
pub const SECS_YEAR_2K: Timestamp = 946_684_800;

/// First calendar year of the epoch
pub const EPOCH_YEAR: u16 = 1970;

/// Day count for each month of a non-leap year
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Broken-down calendar representation of a timestamp
///
/// Produced by [`break_timestamp`] and consumed by [`make_timestamp`].
/// `weekday` is derived from the other fields and is ignored on encode.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    /// Seconds after the minute (0-59)
    pub second: u8,
    /// Minutes after the hour (0-59)
    pub minute: u8,
    /// Hours since midnight (0-23)
    pub hour: u8,
    /// Day of the week (1-7), Sunday is 1
    pub weekday: u8,
    /// Day of the month (1-31)
    pub day: u8,
    /// Month of the year (1-12), January is 1
    pub month: u8,
    /// Years since 1970
    pub year: u8,
}

impl CalendarFields {
    /// Fields of the epoch, 1970-01-01T00:00:00Z (a Thursday)
    pub const EPOCH: Self = Self {
        second: 0,
        minute: 0,
        hour: 0,
        weekday: 5,
        day: 1,
        month: 1,
        year: 0,
    };

    /// Build validated fields, computing the weekday
    ///
    /// `year` is the offset from 1970. Fails if any field is out of range
    /// or the instant does not fit in a [`Timestamp`].
    pub fn new(
        year: u8,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, TimeError> {
        let mut fields = Self {
            second,
            minute,
            hour,
            weekday: 0,
            day,
            month,
            year,
        };
        let timestamp = try_make_timestamp(&fields)?;
        fields.weekday = weekday_of(timestamp);
        Ok(fields)
    }

    /// Full calendar year, e.g. `2014` for a year offset of 44
    pub fn calendar_year(&self) -> u16 {
        EPOCH_YEAR + u16::from(self.year)
    }

    /// Read a single field
    pub fn get(&self, field: CalendarField) -> u8 {
        match field {
            CalendarField::Second => self.second,
            CalendarField::Minute => self.minute,
            CalendarField::Hour => self.hour,
            CalendarField::Weekday => self.weekday,
            CalendarField::Day => self.day,
            CalendarField::Month => self.month,
            CalendarField::Year => self.year,
        }
    }
}

/// Selector for a single [`CalendarFields`] member
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarField {
    Second,
    Minute,
    Hour,
    Weekday,
    Day,
    Month,
    Year,
}

/// Check if year is a leap year (Gregorian calendar)
///
/// Divisible by 4 but not by 100, unless also divisible by 400:
/// 2000 and 2024 are leap years, 1900 and 2100 are not.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`
///
/// Returns 0 for a month outside 1-12.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => MONTH_DAYS[usize::from(month - 1)],
        _ => 0,
    }
}

/// Number of days in `year`
pub fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Convert calendar fields to a Unix timestamp
///
/// The fields are not validated. Passing fields outside their documented
/// ranges, or an instant past 2106-02-07T06:28:15Z, yields an unspecified
/// timestamp. Use [`try_make_timestamp`] for untrusted input.
pub fn make_timestamp(fields: &CalendarFields) -> Timestamp {
    seconds_since_epoch(fields) as Timestamp
}

/// Convert calendar fields to a Unix timestamp, validating every field
pub fn try_make_timestamp(fields: &CalendarFields) -> Result<Timestamp, TimeError> {
    if !(1..=12).contains(&fields.month) {
        return Err(TimeError::InvalidMonth);
    }
    if fields.day == 0 || fields.day > days_in_month(fields.calendar_year(), fields.month) {
        return Err(TimeError::InvalidDay);
    }
    if fields.hour >= 24 {
        return Err(TimeError::InvalidHour);
    }
    if fields.minute >= 60 {
        return Err(TimeError::InvalidMinute);
    }
    if fields.second >= 60 {
        return Err(TimeError::InvalidSecond);
    }

    Timestamp::try_from(seconds_since_epoch(fields)).map_err(|_| TimeError::OutOfRange)
}

/// Convert a Unix timestamp to calendar fields
pub fn break_timestamp(timestamp: Timestamp) -> CalendarFields {
    let mut time = timestamp;
    let second = (time % 60) as u8;
    time /= 60; // now it is minutes
    let minute = (time % 60) as u8;
    time /= 60; // now it is hours
    let hour = (time % 24) as u8;
    time /= 24; // now it is days since epoch

    let weekday = day_number_to_weekday(time);

    let mut year: u8 = 0;
    loop {
        let length = u32::from(days_in_year(EPOCH_YEAR + u16::from(year)));
        if time < length {
            break;
        }
        time -= length;
        year += 1;
    }
    // `time` is now the day of the year, starting at 0

    let calendar_year = EPOCH_YEAR + u16::from(year);
    let mut month: u8 = 1;
    while month < 12 {
        let length = u32::from(days_in_month(calendar_year, month));
        if time < length {
            break;
        }
        time -= length;
        month += 1;
    }

    CalendarFields {
        second,
        minute,
        hour,
        weekday,
        day: time as u8 + 1,
        month,
        year,
    }
}

/// Weekday (1-7, Sunday is 1) of a timestamp
pub(crate) fn weekday_of(timestamp: Timestamp) -> u8 {
    day_number_to_weekday(timestamp / SECS_PER_DAY)
}

// 1970-01-01 was a Thursday
fn day_number_to_weekday(days: u32) -> u8 {
    ((days + 4) % DAYS_PER_WEEK) as u8 + 1
}

fn seconds_since_epoch(fields: &CalendarFields) -> u64 {
    let year = fields.calendar_year();

    let mut days = u64::from(fields.year) * 365;
    days += (EPOCH_YEAR..year).filter(|&y| is_leap_year(y)).count() as u64;
    days += (1..fields.month)
        .map(|month| u64::from(days_in_month(year, month)))
        .sum::<u64>();
    days += u64::from(fields.day.saturating_sub(1));

    days * u64::from(SECS_PER_DAY)
        + u64::from(fields.hour) * u64::from(SECS_PER_HOUR)
        + u64::from(fields.minute) * u64::from(SECS_PER_MINUTE)
        + u64::from(fields.second)
}
