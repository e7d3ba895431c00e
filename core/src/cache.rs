//! Single-slot cache of the last decoded timestamp
//!
//! Printing "now" field by field decodes the same instant several times in
//! a row; the cache keeps the last result so only the first query pays for
//! the year/month walk.

use tickclock_hal::Timestamp;

use crate::calendar::{break_timestamp, CalendarField, CalendarFields};

/// Last (timestamp, fields) pair handed out by the clock
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCache {
    timestamp: Timestamp,
    fields: CalendarFields,
}

impl TimeCache {
    /// Create a cache primed with the epoch
    pub const fn new() -> Self {
        Self {
            timestamp: 0,
            fields: CalendarFields::EPOCH,
        }
    }

    /// Decode `timestamp` unless it is already cached
    pub fn refresh(&mut self, timestamp: Timestamp) -> &CalendarFields {
        if self.timestamp != timestamp {
            self.timestamp = timestamp;
            self.fields = break_timestamp(timestamp);
        }
        &self.fields
    }

    /// Read one field of the cached instant
    pub fn field(&self, field: CalendarField) -> u8 {
        self.fields.get(field)
    }

    /// Refresh for `timestamp`, then read one field
    pub fn field_at(&mut self, timestamp: Timestamp, field: CalendarField) -> u8 {
        self.refresh(timestamp).get(field)
    }

    /// Timestamp currently held in the slot
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Fields currently held in the slot
    pub fn fields(&self) -> &CalendarFields {
        &self.fields
    }
}

impl Default for TimeCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FIELDS: [CalendarField; 7] = [
        CalendarField::Second,
        CalendarField::Minute,
        CalendarField::Hour,
        CalendarField::Weekday,
        CalendarField::Day,
        CalendarField::Month,
        CalendarField::Year,
    ];

    #[test]
    fn test_fresh_cache_matches_epoch() {
        let cache = TimeCache::new();
        assert_eq!(cache.timestamp(), 0);
        assert_eq!(*cache.fields(), break_timestamp(0));
    }

    #[test]
    fn test_refresh_replaces_slot() {
        let mut cache = TimeCache::new();
        let fields = *cache.refresh(1_388_584_530);
        assert_eq!(cache.timestamp(), 1_388_584_530);
        assert_eq!(fields, break_timestamp(1_388_584_530));

        cache.refresh(1_709_164_800);
        assert_eq!(cache.timestamp(), 1_709_164_800);
        assert_eq!(cache.field(CalendarField::Day), 29);
    }

    #[test]
    fn test_cache_is_transparent() {
        let mut cache = TimeCache::new();
        let instants = [0u32, 1, 1, 59, 60, 86_399, 86_400, 1_388_584_530, 1_388_584_530, u32::MAX, 0];

        for &timestamp in &instants {
            let fresh = break_timestamp(timestamp);
            for &field in &ALL_FIELDS {
                assert_eq!(
                    cache.field_at(timestamp, field),
                    fresh.get(field),
                    "Cached {:?} differs for timestamp {}",
                    field,
                    timestamp
                );
            }
        }
    }
}
