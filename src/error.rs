//! Unified error type for bordtennis.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Derives `defmt::Format` for on-target logging when the `defmt` feature
//! is enabled.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Scoring
    /// A numeric player id outside `1..=2`.
    InvalidPlayer(u8),

    // Storage
    /// Flash read/write/erase failed.
    Storage,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPlayer(id) => write!(f, "invalid player id {}", id),
            Error::Storage => f.write_str("flash storage error"),
            Error::Display => f.write_str("display error"),
            Error::BufferOverflow => f.write_str("buffer overflow"),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::BufferOverflow
    }
}
