//! `TickSource` backed by the embassy-time driver

use crate::TickSource;

/// Reads ticks from `embassy_time::Instant`
///
/// The 64-bit embassy tick count is truncated to 32 bits; the clock engine
/// tolerates the resulting wrap.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTicks;

impl TickSource for EmbassyTicks {
    const TICKS_PER_SECOND: u32 = embassy_time::TICK_HZ as u32;

    fn ticks_now(&self) -> u32 {
        embassy_time::Instant::now().as_ticks() as u32
    }
}
