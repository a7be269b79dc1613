#![cfg_attr(not(test), no_std)]

mod fmt;

/// Binary-coded decimal conversions used by every DS1307 register.
pub mod bcd;

pub mod bus;

/// Addressed single-register access on top of a [`bus::Transfer`].
mod device;
pub use device::Device;

/// DS1307 register map and bit masks.
pub mod register;

/// Wall-clock time and calendar types.
pub mod time;

/// Human-readable rendering of the time and calendar types.
mod display;
pub use display::weekday_name;

mod ds1307;
pub use ds1307::{ClockError, ClockState, Ds1307};

#[cfg(test)]
pub(crate) mod sim;
