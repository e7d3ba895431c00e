//! ISO-8601 rendering of timestamps
//!
//! Produces `YYYY-MM-DDTHH:MM:SSZ`, the same shape defmt's `:iso8601s`
//! hint prints, without allocating.

use core::fmt::{self, Write};

use heapless::String;
use tickclock_hal::Timestamp;

use crate::calendar::{break_timestamp, CalendarFields};

/// Length of a rendered timestamp, e.g. `2014-01-01T13:55:30Z`
pub const ISO8601_LEN: usize = 20;

impl fmt::Display for CalendarFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.calendar_year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

/// Write `timestamp` as ISO-8601 into any `core::fmt::Write` sink
pub fn write_iso8601<W: Write>(out: &mut W, timestamp: Timestamp) -> fmt::Result {
    write!(out, "{}", break_timestamp(timestamp))
}

/// Render `timestamp` as an ISO-8601 string
pub fn iso8601(timestamp: Timestamp) -> String<ISO8601_LEN> {
    let mut out = String::new();
    // Every u32 timestamp renders to exactly ISO8601_LEN bytes
    let _ = write_iso8601(&mut out, timestamp);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso8601_format() {
        assert_eq!(iso8601(0).as_str(), "1970-01-01T00:00:00Z");
        assert_eq!(iso8601(1_388_584_530).as_str(), "2014-01-01T13:55:30Z");
        assert_eq!(iso8601(1_709_164_800).as_str(), "2024-02-29T00:00:00Z");
        assert_eq!(iso8601(u32::MAX).as_str(), "2106-02-07T06:28:15Z");
    }

    #[test]
    fn test_display_matches_iso8601() {
        let fields = break_timestamp(946_684_799);
        let mut rendered = String::<32>::new();
        write!(rendered, "{}", fields).unwrap();
        assert_eq!(rendered.as_str(), "1999-12-31T23:59:59Z");
        assert_eq!(rendered.len(), ISO8601_LEN);
    }
}
