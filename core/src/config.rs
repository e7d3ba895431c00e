//! Clock configuration structures

use crate::calendar::SECS_PER_DAY;

/// Resync interval used when none is given (one day)
pub const DEFAULT_SYNC_INTERVAL_SECS: u32 = SECS_PER_DAY;

/// Clock engine configuration
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Seconds between resync attempts against the time provider.
    /// `0` selects [`DEFAULT_SYNC_INTERVAL_SECS`].
    pub sync_interval_secs: u32,
}

impl ClockConfig {
    /// Interval with the `0` placeholder resolved
    pub fn effective_sync_interval(&self) -> u32 {
        effective_interval(self.sync_interval_secs)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
        }
    }
}

pub(crate) fn effective_interval(secs: u32) -> u32 {
    if secs == 0 {
        DEFAULT_SYNC_INTERVAL_SECS
    } else {
        secs
    }
}
