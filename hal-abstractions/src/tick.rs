//! Free-running tick counter abstraction

/// Monotonic tick counter, typically incremented from a timer interrupt
///
/// The counter is free to wrap at 2^32. Consumers must compare readings
/// with wrapping subtraction, so a single wrap between two readings is
/// harmless.
pub trait TickSource {
    /// Number of ticks in one second. Must be non-zero.
    const TICKS_PER_SECOND: u32;

    /// Ticks elapsed since startup, modulo 2^32
    fn ticks_now(&self) -> u32;
}

impl<T: TickSource> TickSource for &T {
    const TICKS_PER_SECOND: u32 = T::TICKS_PER_SECOND;

    #[inline]
    fn ticks_now(&self) -> u32 {
        (**self).ticks_now()
    }
}
