//! Clock engine
//!
//! Keeps the authoritative seconds counter, advances it from the tick
//! source and resynchronizes it against an optional [`TimeProvider`].
//!
//! ## Sync status
//! - `NotSet`: never set and never synced. Stays `NotSet` while the
//!   provider has nothing to offer.
//! - `Ok`: set explicitly or synced from the provider.
//! - `NeedsSync`: was `Ok`, but a due resync found no data.
//!
//! ## Ticks
//! Whole seconds are peeled off the tick delta one at a time and the anchor
//! moves by exactly `TICKS_PER_SECOND` each step, so the sub-second residue
//! carries over to the next poll instead of being truncated away.

use tickclock_hal::{NoProvider, TickSource, TimeProvider, Timestamp};

use crate::cache::TimeCache;
use crate::calendar::{CalendarField, CalendarFields, EPOCH_YEAR};
use crate::config::{effective_interval, ClockConfig};
use crate::error::TimeError;

/// Confidence in the current clock value
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncStatus {
    /// Time has not been set
    #[default]
    NotSet,
    /// Time was set, but the last resync found no data
    NeedsSync,
    /// Time is valid and in sync with the time source
    Ok,
}

/// Resync bookkeeping
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncState {
    /// Counter value at or after which the provider is asked again
    pub next_sync_due: Timestamp,
    /// Seconds between resync attempts
    pub interval_secs: u32,
    /// Current confidence in the clock
    pub status: SyncStatus,
}

/// Software wall clock driven by a tick source
pub struct Clock<T, P = NoProvider> {
    ticks: T,
    provider: Option<P>,
    now: Timestamp,
    tick_anchor: u32,
    sync: SyncState,
    cache: TimeCache,
}

impl<T: TickSource> Clock<T, NoProvider> {
    /// Create a clock without a time provider, using the default config
    pub fn new(ticks: T) -> Self {
        Self::with_config(ticks, ClockConfig::default())
    }
}

impl<T: TickSource, P: TimeProvider> Clock<T, P> {
    /// Create a clock starting at the epoch with status `NotSet`
    pub fn with_config(ticks: T, config: ClockConfig) -> Self {
        debug_assert!(T::TICKS_PER_SECOND > 0, "tick rate must be non-zero");

        let tick_anchor = ticks.ticks_now();
        Self {
            ticks,
            provider: None,
            now: 0,
            tick_anchor,
            sync: SyncState {
                next_sync_due: 0,
                interval_secs: config.effective_sync_interval(),
                status: SyncStatus::NotSet,
            },
            cache: TimeCache::new(),
        }
    }

    /// Create a clock and immediately sync it against `provider`
    pub fn with_provider(ticks: T, provider: P, interval_secs: u32) -> Self {
        let mut clock = Self::with_config(ticks, ClockConfig::default());
        clock.set_time_provider(Some(provider), interval_secs);
        clock
    }

    /// Set the clock to `timestamp`
    ///
    /// The only operation that may move time backwards. Marks the clock
    /// `Ok` and schedules the next resync one interval from `timestamp`.
    pub fn set_time(&mut self, timestamp: Timestamp) {
        self.now = timestamp;
        self.sync.next_sync_due = timestamp.saturating_add(self.sync.interval_secs);
        self.sync.status = SyncStatus::Ok;
        self.tick_anchor = self.ticks.ticks_now();

        #[cfg(feature = "defmt")]
        defmt::info!("Clock set to {}", timestamp);
    }

    /// Poll the clock: resync if due, advance by elapsed ticks, return now
    pub fn get_time(&mut self) -> Timestamp {
        if self.sync.next_sync_due <= self.now {
            self.resync();
        }
        self.advance();
        self.now
    }

    /// Alias for [`Clock::get_time`]
    pub fn now(&mut self) -> Timestamp {
        self.get_time()
    }

    /// Poll, failing while the clock has never been set
    pub fn checked_time(&mut self) -> Result<Timestamp, TimeError> {
        let now = self.get_time();
        match self.sync.status {
            SyncStatus::NotSet => Err(TimeError::NotSet),
            _ => Ok(now),
        }
    }

    /// Poll, then report the sync status
    pub fn status(&mut self) -> SyncStatus {
        self.get_time();
        self.sync.status
    }

    /// Install a time provider and sync against it right away
    ///
    /// `None` is ignored. An `interval_secs` of `0` selects one day.
    pub fn set_time_provider(&mut self, provider: Option<P>, interval_secs: u32) {
        let Some(provider) = provider else {
            return;
        };

        self.provider = Some(provider);
        self.sync.interval_secs = effective_interval(interval_secs);
        self.sync.next_sync_due = self.now;

        #[cfg(feature = "defmt")]
        defmt::debug!("Time provider installed, interval {}s", self.sync.interval_secs);

        self.get_time();
    }

    /// Remove the time provider; the clock keeps free-running
    pub fn clear_time_provider(&mut self) -> Option<P> {
        self.provider.take()
    }

    /// Sync bookkeeping, without polling
    pub fn sync_state(&self) -> &SyncState {
        &self.sync
    }

    /// The underlying tick source
    pub fn tick_source(&self) -> &T {
        &self.ticks
    }

    /// All calendar fields for `timestamp`
    pub fn fields_at(&mut self, timestamp: Timestamp) -> CalendarFields {
        *self.cache.refresh(timestamp)
    }

    /// All calendar fields for now
    pub fn fields(&mut self) -> CalendarFields {
        let now = self.get_time();
        self.fields_at(now)
    }

    pub fn second_at(&mut self, timestamp: Timestamp) -> u8 {
        self.cache.field_at(timestamp, CalendarField::Second)
    }

    pub fn minute_at(&mut self, timestamp: Timestamp) -> u8 {
        self.cache.field_at(timestamp, CalendarField::Minute)
    }

    pub fn hour_at(&mut self, timestamp: Timestamp) -> u8 {
        self.cache.field_at(timestamp, CalendarField::Hour)
    }

    /// Day of the week (1-7), Sunday is 1
    pub fn weekday_at(&mut self, timestamp: Timestamp) -> u8 {
        self.cache.field_at(timestamp, CalendarField::Weekday)
    }

    /// Day of the month (1-31)
    pub fn day_at(&mut self, timestamp: Timestamp) -> u8 {
        self.cache.field_at(timestamp, CalendarField::Day)
    }

    /// Month (1-12)
    pub fn month_at(&mut self, timestamp: Timestamp) -> u8 {
        self.cache.field_at(timestamp, CalendarField::Month)
    }

    /// Years since 1970
    pub fn year_at(&mut self, timestamp: Timestamp) -> u8 {
        self.cache.field_at(timestamp, CalendarField::Year)
    }

    /// Full calendar year, e.g. 2014
    pub fn calendar_year_at(&mut self, timestamp: Timestamp) -> u16 {
        EPOCH_YEAR + u16::from(self.year_at(timestamp))
    }

    pub fn second(&mut self) -> u8 {
        let now = self.get_time();
        self.second_at(now)
    }

    pub fn minute(&mut self) -> u8 {
        let now = self.get_time();
        self.minute_at(now)
    }

    pub fn hour(&mut self) -> u8 {
        let now = self.get_time();
        self.hour_at(now)
    }

    pub fn weekday(&mut self) -> u8 {
        let now = self.get_time();
        self.weekday_at(now)
    }

    pub fn day(&mut self) -> u8 {
        let now = self.get_time();
        self.day_at(now)
    }

    pub fn month(&mut self) -> u8 {
        let now = self.get_time();
        self.month_at(now)
    }

    /// Years since 1970, now
    pub fn year(&mut self) -> u8 {
        let now = self.get_time();
        self.year_at(now)
    }

    pub fn calendar_year(&mut self) -> u16 {
        let now = self.get_time();
        self.calendar_year_at(now)
    }

    fn resync(&mut self) {
        let Some(provider) = self.provider.as_mut() else {
            return;
        };

        match provider.fetch_time() {
            Some(timestamp) if timestamp != 0 => {
                #[cfg(feature = "defmt")]
                defmt::info!("Clock resynced from provider");

                self.set_time(timestamp);
            }
            _ => {
                self.sync.next_sync_due = self.now.saturating_add(self.sync.interval_secs);
                if self.sync.status == SyncStatus::Ok {
                    self.sync.status = SyncStatus::NeedsSync;
                }

                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "Time provider returned no data, next attempt at {}",
                    self.sync.next_sync_due
                );
            }
        }
    }

    fn advance(&mut self) {
        let ticks = self.ticks.ticks_now();
        while ticks.wrapping_sub(self.tick_anchor) >= T::TICKS_PER_SECOND {
            self.now = self.now.saturating_add(1);
            self.tick_anchor = self.tick_anchor.wrapping_add(T::TICKS_PER_SECOND);
        }
    }
}
