//! Interrupt-safe wrapper around a single clock
//!
//! The engine itself does no locking. When the clock is reached from both
//! thread and interrupt context, park it in a `SharedClock` static and go
//! through [`SharedClock::with`], which holds a critical section for the
//! duration of the call.
//!
//! ```ignore
//! static CLOCK: SharedClock<BoardTicks> = SharedClock::new();
//!
//! CLOCK.install(Clock::new(BoardTicks));
//! let now = CLOCK.get_time()?;
//! ```

use core::cell::RefCell;

use critical_section::Mutex;
use tickclock_hal::{NoProvider, TickSource, TimeProvider, Timestamp};

use crate::clock::{Clock, SyncStatus};
use crate::error::TimeError;

/// Clock slot guarded by a critical-section mutex
pub struct SharedClock<T, P = NoProvider> {
    clock: Mutex<RefCell<Option<Clock<T, P>>>>,
}

impl<T, P> SharedClock<T, P> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            clock: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<T: TickSource, P: TimeProvider> SharedClock<T, P> {
    /// Put `clock` in the slot, returning the previous one
    pub fn install(&self, clock: Clock<T, P>) -> Option<Clock<T, P>> {
        critical_section::with(|cs| self.clock.borrow(cs).replace(Some(clock)))
    }

    /// Take the clock out of the slot
    pub fn take(&self) -> Option<Clock<T, P>> {
        critical_section::with(|cs| self.clock.borrow(cs).take())
    }

    /// Run `f` against the clock inside a critical section
    pub fn with<R>(&self, f: impl FnOnce(&mut Clock<T, P>) -> R) -> Result<R, TimeError> {
        critical_section::with(|cs| {
            if let Some(clock) = self.clock.borrow(cs).borrow_mut().as_mut() {
                Ok(f(clock))
            } else {
                Err(TimeError::NotInitialized)
            }
        })
    }

    /// Poll the clock
    pub fn get_time(&self) -> Result<Timestamp, TimeError> {
        self.with(|clock| clock.get_time())
    }

    /// Set the clock
    pub fn set_time(&self, timestamp: Timestamp) -> Result<(), TimeError> {
        self.with(|clock| clock.set_time(timestamp))
    }

    /// Poll, then report the sync status
    pub fn status(&self) -> Result<SyncStatus, TimeError> {
        self.with(|clock| clock.status())
    }
}

impl<T, P> Default for SharedClock<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
