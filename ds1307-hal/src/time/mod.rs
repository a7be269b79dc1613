/// Time, calendar and combined date-time values.
mod datetime;
pub use datetime::{Date, DateTime, DatetimeError, Time, TimeFormat, Weekday};

/// Traits for a datetime-based clock (e.g. real-time clock).
mod datetime_clock;
pub use datetime_clock::DatetimeClock;
