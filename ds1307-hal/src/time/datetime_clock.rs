//! Traits for datetime-based clocks (e.g. real-time clocks).

use super::DateTime;

/// Trait for datetime-based clock (e.g. real-time clock).
/// This trait provides methods to get and set the current wall-clock date and time in a structured format.
pub trait DatetimeClock {
    /// Error reported by the clock.
    type Error;

    /// Returns the current structured date and time.
    fn get_current_datetime(&mut self) -> Result<DateTime, Self::Error>;

    /// Sets the current structured date and time.
    fn set_current_datetime(&mut self, datetime: &DateTime) -> Result<(), Self::Error>;

    /// Tick rate of the clock in Hz; a clock counting whole seconds reports 1.
    const MAX_RESOLUTION_HZ: u32;
}
