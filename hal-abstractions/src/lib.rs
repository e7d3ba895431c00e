//! Hardware abstraction traits for the tickclock software clock
//!
//! This crate defines the seams between the platform-agnostic clock logic
//! and the board: a free-running tick counter and an optional source of
//! accurate wall-clock time (GPS, NTP, RTC). BSPs implement these traits.

#![no_std]
#![deny(unsafe_code)]

mod provider;
mod tick;

#[cfg(feature = "embassy-time")]
mod embassy;

pub use provider::{NoProvider, TimeProvider};
pub use tick::TickSource;

#[cfg(feature = "embassy-time")]
pub use embassy::EmbassyTicks;

/// Seconds elapsed since 1970-01-01T00:00:00Z
///
/// A `u32` covers 1970-01-01T00:00:00Z through 2106-02-07T06:28:15Z.
pub type Timestamp = u32;
