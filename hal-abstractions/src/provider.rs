//! External time source abstraction

use crate::Timestamp;

/// Source of accurate wall-clock time used to resynchronize the clock
///
/// Implementations must return immediately. `None` means no time is
/// available right now (no GPS fix, NTP reply not yet received, ...).
/// A returned timestamp of `0` is treated the same as `None`.
pub trait TimeProvider {
    /// Fetch the current time from the external source
    fn fetch_time(&mut self) -> Option<Timestamp>;
}

impl<F> TimeProvider for F
where
    F: FnMut() -> Option<Timestamp>,
{
    fn fetch_time(&mut self) -> Option<Timestamp> {
        self()
    }
}

/// Provider for clocks that never resynchronize
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoProvider;

impl TimeProvider for NoProvider {
    fn fetch_time(&mut self) -> Option<Timestamp> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_provider() {
        let mut calls = 0;
        let mut provider = || {
            calls += 1;
            Some(1_388_584_530)
        };
        assert_eq!(provider.fetch_time(), Some(1_388_584_530));
        assert_eq!(provider.fetch_time(), Some(1_388_584_530));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_no_provider_is_empty() {
        assert_eq!(NoProvider.fetch_time(), None);
    }
}
