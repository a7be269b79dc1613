//! DS1307 driver.
//!
//! Every operation is a short sequence of single-register transactions. The
//! driver keeps no cached state, performs no retries and does not range-check
//! what it writes or reads. A failing transaction does not stop the sequence:
//! every register access of the operation is still issued, and the first
//! error is returned unchanged once the sequence is done.

use crate::bcd::{from_bcd, to_bcd};
use crate::bus::{Transfer, DS1307_ADDRESS};
use crate::device::{Device, FirstError};
use crate::register::{Register, CLOCK_HALT, HOUR_MODE_12, HOUR_PM};
use crate::time::{Date, DateTime, DatetimeClock, DatetimeError, Time, TimeFormat};

/// State of the oscillator as reported by the clock-halt flag.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ClockState {
    /// CH = 0, the clock is counting.
    Running,
    /// CH = 1, the oscillator is stopped.
    Halted,
}

impl ClockState {
    /// State encoded in a raw seconds register value.
    pub const fn from_seconds_register(raw: u8) -> ClockState {
        if raw & CLOCK_HALT != 0 {
            ClockState::Halted
        } else {
            ClockState::Running
        }
    }

    /// The raw flag: 1 when halted, 0 when running.
    pub const fn bit(self) -> u8 {
        match self {
            ClockState::Running => 0,
            ClockState::Halted => 1,
        }
    }
}

/// Errors of the [`DatetimeClock`] implementation.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ClockError<E> {
    /// The transfer capability reported a failure.
    Bus(E),
    /// The registers hold a date or time that is out of range.
    Datetime(DatetimeError),
}

impl<E> From<DatetimeError> for ClockError<E> {
    fn from(error: DatetimeError) -> Self {
        ClockError::Datetime(error)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for ClockError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::Bus(e) => write!(f, "DS1307 bus transfer failed: {:?}", e),
            ClockError::Datetime(e) => write!(f, "DS1307 holds an invalid date/time: {:?} out of range", e),
        }
    }
}

/// Pack an hour value and format into the hours register layout.
const fn pack_hours(hours: u8, format: TimeFormat) -> u8 {
    let bcd = to_bcd(hours);
    match format {
        TimeFormat::TwentyFourHour => bcd & !HOUR_MODE_12,
        TimeFormat::TwelveHourAm => (bcd | HOUR_MODE_12) & !HOUR_PM,
        TimeFormat::TwelveHourPm => bcd | HOUR_MODE_12 | HOUR_PM,
    }
}

/// Split a raw hours register value into the hour and its format.
const fn unpack_hours(raw: u8) -> (u8, TimeFormat) {
    if raw & HOUR_MODE_12 != 0 {
        let format = if raw & HOUR_PM != 0 {
            TimeFormat::TwelveHourPm
        } else {
            TimeFormat::TwelveHourAm
        };
        (from_bcd(raw & !(HOUR_MODE_12 | HOUR_PM)), format)
    } else {
        (from_bcd(raw & 0x3F), TimeFormat::TwentyFourHour)
    }
}

/// DS1307 real-time clock on a [`Transfer`] capability.
///
/// The transfer can be owned or lent as `&mut`; see [`Transfer`].
#[derive(Debug)]
pub struct Ds1307<T> {
    device: Device<T>,
}

impl<T: Transfer> Ds1307<T> {
    /// Create a driver for the DS1307 at its fixed bus address.
    ///
    /// No bus traffic happens until [`Ds1307::init`] or another operation is called.
    pub const fn new(transfer: T) -> Self {
        Self {
            device: Device::new(transfer, DS1307_ADDRESS),
        }
    }

    /// Start the oscillator and report the clock-halt flag.
    ///
    /// The seconds register is overwritten with zero, which clears CH (and
    /// the seconds count), then read back. The returned state is the CH
    /// flag observed by that read, so [`ClockState::Halted`] means the clear
    /// did not take. No time or date is programmed.
    pub fn init(&mut self) -> Result<ClockState, T::Error> {
        let mut outcome = FirstError::new();
        outcome.step(self.device.write_register(Register::Seconds, 0x00));
        let raw = outcome.step(self.device.read_register(Register::Seconds));
        let state = ClockState::from_seconds_register(raw);

        match state {
            ClockState::Running => debug!("DS1307 clock running"),
            ClockState::Halted => warn!("DS1307 clock still halted after init"),
        }
        outcome.finish(state)
    }

    /// Read the clock-halt flag without modifying it.
    pub fn clock_state(&mut self) -> Result<ClockState, T::Error> {
        let raw = self.device.read_register(Register::Seconds)?;
        Ok(ClockState::from_seconds_register(raw))
    }

    /// Whether the oscillator is counting.
    pub fn is_running(&mut self) -> Result<bool, T::Error> {
        Ok(self.clock_state()? == ClockState::Running)
    }

    /// Program the time of day.
    ///
    /// Seconds and minutes are written before hours. The write always leaves
    /// the clock running. Fields are not range-checked.
    pub fn set_time(&mut self, time: &Time) -> Result<(), T::Error> {
        let seconds = to_bcd(time.seconds) & !CLOCK_HALT;
        let minutes = to_bcd(time.minutes);
        let hours = pack_hours(time.hours, time.format);

        let mut outcome = FirstError::new();
        outcome.step(self.device.write_register(Register::Seconds, seconds));
        outcome.step(self.device.write_register(Register::Minutes, minutes));
        outcome.step(self.device.write_register(Register::Hours, hours));
        outcome.finish(())
    }

    /// Program the calendar: month, year, day of month, then weekday.
    ///
    /// Fields are not range-checked.
    pub fn set_date(&mut self, date: &Date) -> Result<(), T::Error> {
        let mut outcome = FirstError::new();
        outcome.step(self.device.write_register(Register::Month, to_bcd(date.month)));
        outcome.step(self.device.write_register(Register::Year, to_bcd(date.year)));
        outcome.step(self.device.write_register(Register::Date, to_bcd(date.date)));
        outcome.step(self.device.write_register(Register::Day, to_bcd(date.day)));
        outcome.finish(())
    }

    /// Read the time of day in whichever format the chip is running.
    pub fn get_time(&mut self) -> Result<Time, T::Error> {
        let mut outcome = FirstError::new();
        let seconds = outcome.step(self.device.read_register(Register::Seconds));
        let minutes = outcome.step(self.device.read_register(Register::Minutes));
        let (hours, format) = unpack_hours(outcome.step(self.device.read_register(Register::Hours)));

        outcome.finish(Time {
            hours,
            minutes: from_bcd(minutes),
            seconds: from_bcd(seconds & !CLOCK_HALT),
            format,
        })
    }

    /// Read the calendar.
    pub fn get_date(&mut self) -> Result<Date, T::Error> {
        let mut outcome = FirstError::new();
        let date = from_bcd(outcome.step(self.device.read_register(Register::Date)));
        let month = from_bcd(outcome.step(self.device.read_register(Register::Month)));
        let year = from_bcd(outcome.step(self.device.read_register(Register::Year)));
        let day = from_bcd(outcome.step(self.device.read_register(Register::Day)));

        outcome.finish(Date { day, date, month, year })
    }

    /// Give the transfer capability back.
    pub fn release(self) -> T {
        self.device.release()
    }
}

impl<T: Transfer> DatetimeClock for Ds1307<T> {
    type Error = ClockError<T::Error>;

    /// Reads the date, then the time. A rollover between the two reads is not detected.
    fn get_current_datetime(&mut self) -> Result<DateTime, Self::Error> {
        let date = self.get_date();
        let time = self.get_time();
        let (date, time) = (date.map_err(ClockError::Bus)?, time.map_err(ClockError::Bus)?);
        Ok(DateTime::new(date, time)?)
    }

    fn set_current_datetime(&mut self, datetime: &DateTime) -> Result<(), Self::Error> {
        let time = self.set_time(&datetime.time());
        let date = self.set_date(&datetime.date());
        time.and(date).map_err(ClockError::Bus)
    }

    const MAX_RESOLUTION_HZ: u32 = 1;
}
