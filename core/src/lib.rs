//! Platform-agnostic software wall clock
//!
//! This crate keeps Unix time on targets that only have a free-running tick
//! counter. It has NO hardware dependencies: the board supplies a
//! [`TickSource`] and, optionally, a [`TimeProvider`] (GPS, NTP, RTC) that
//! the clock resynchronizes against at a fixed interval.
//!
//! ## Modules
//! - [`calendar`]: timestamp ⇄ calendar field conversions
//! - [`cache`]: single-slot cache of the last decoded timestamp
//! - [`clock`]: the clock engine and its sync state machine
//! - [`boundaries`]: day and week projections of a timestamp
//! - [`shared`]: critical-section wrapper for interrupt-shared clocks
//! - [`format`]: ISO-8601 rendering
//!
//! ## Usage
//! ```ignore
//! let mut clock = Clock::with_provider(BoardTicks, gps_time, 3600);
//!
//! if clock.status() == SyncStatus::Ok {
//!     info!("{}", iso8601(clock.get_time()).as_str());
//! }
//! ```
//!
//! ## Features
//! - `defmt`: derive `defmt::Format` for public types and log sync events
//! - `embassy-time`: tick source backed by `embassy_time::Instant`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod boundaries;
pub mod cache;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod shared;

pub use boundaries::{
    day_of_week, elapsed_days, next_midnight, next_week_start, prev_midnight, prev_week_start,
    seconds_this_week, seconds_today,
};
pub use cache::TimeCache;
pub use calendar::{
    break_timestamp, days_in_month, days_in_year, is_leap_year, make_timestamp,
    try_make_timestamp, CalendarField, CalendarFields, DAYS_PER_WEEK, EPOCH_YEAR,
    SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE, SECS_PER_WEEK, SECS_YEAR_2K,
};
pub use clock::{Clock, SyncState, SyncStatus};
pub use config::{ClockConfig, DEFAULT_SYNC_INTERVAL_SECS};
pub use error::TimeError;
pub use format::{iso8601, write_iso8601, ISO8601_LEN};
pub use shared::SharedClock;

pub use tickclock_hal::{NoProvider, TickSource, TimeProvider, Timestamp};

#[cfg(feature = "embassy-time")]
pub use tickclock_hal::EmbassyTicks;
