//! Clock error types

/// Clock and calendar operation errors
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// Shared clock accessed before a clock was installed
    NotInitialized,
    /// Clock has never been set or synchronized
    NotSet,
    /// Month outside 1-12
    InvalidMonth,
    /// Day outside the length of the given month
    InvalidDay,
    /// Hour outside 0-23
    InvalidHour,
    /// Minute outside 0-59
    InvalidMinute,
    /// Second outside 0-59
    InvalidSecond,
    /// Instant does not fit in a 32-bit timestamp
    OutOfRange,
}

impl core::fmt::Display for TimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "Clock not initialized"),
            Self::NotSet => write!(f, "Clock not set"),
            Self::InvalidMonth => write!(f, "Invalid month"),
            Self::InvalidDay => write!(f, "Invalid day of month"),
            Self::InvalidHour => write!(f, "Invalid hour"),
            Self::InvalidMinute => write!(f, "Invalid minute"),
            Self::InvalidSecond => write!(f, "Invalid second"),
            Self::OutOfRange => write!(f, "Timestamp out of range"),
        }
    }
}

// Implement core::error::Error for no_std compatibility
impl core::error::Error for TimeError {}
