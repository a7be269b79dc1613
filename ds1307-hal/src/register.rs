//! Timekeeping registers occupy addresses 0x00 through 0x06. Each holds one
//! BCD field; the seconds and hours registers also carry control bits.

/// A timekeeping register of the DS1307.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
#[repr(u8)]
pub enum Register {
    /// Seconds (00-59), bit 7 is the clock-halt flag.
    Seconds = 0x00,
    /// Minutes (00-59).
    Minutes = 0x01,
    /// Hours, bit 6 selects 12-hour mode and bit 5 is AM/PM in that mode.
    Hours = 0x02,
    /// Day of the week (1-7).
    Day = 0x03,
    /// Day of the month (01-31).
    Date = 0x04,
    /// Month (01-12).
    Month = 0x05,
    /// Two-digit year (00-99).
    Year = 0x06,
}

impl Register {
    /// The register's address on the device.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Clock-halt flag in [`Register::Seconds`]. Set means the oscillator is stopped.
pub const CLOCK_HALT: u8 = 1 << 7;

/// 12/24-hour mode select in [`Register::Hours`]. Set means 12-hour mode.
pub const HOUR_MODE_12: u8 = 1 << 6;

/// AM/PM flag in [`Register::Hours`] while in 12-hour mode. Set means PM.
pub const HOUR_PM: u8 = 1 << 5;
