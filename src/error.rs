//! Unified error type for celeste-remote.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // USB
    /// USB stack rejected a report write (endpoint disabled, bus reset).
    Usb,

    // Generic
    /// Operation timed out.
    Timeout,
}
