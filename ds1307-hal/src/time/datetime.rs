//! Time and calendar values as stored by the DS1307.
//!
//! [`Time`] and [`Date`] mirror the register file one field per register and
//! are not validated, so whatever the chip holds can be represented.
//! [`DateTime`] is the checked combination of both.

#[cfg(feature = "chrono")]
use chrono::{Datelike, Timelike};

/// How the hour field is interpreted.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub enum TimeFormat {
    /// 12-hour clock, before noon. Hours are 1-12.
    TwelveHourAm,
    /// 12-hour clock, noon and after. Hours are 1-12.
    TwelveHourPm,
    /// 24-hour clock. Hours are 0-23.
    #[default]
    TwentyFourHour,
}

impl TimeFormat {
    /// Whether this is one of the two 12-hour variants.
    pub const fn is_12_hour(self) -> bool {
        !matches!(self, TimeFormat::TwentyFourHour)
    }
}

/// Time of day.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct Time {
    /// Hour, 1-12 in the 12-hour formats and 0-23 otherwise.
    pub hours: u8,
    /// Minute (0-59).
    pub minutes: u8,
    /// Second (0-59). Never includes the clock-halt flag.
    pub seconds: u8,
    /// Interpretation of `hours`.
    pub format: TimeFormat,
}

impl Time {
    /// The hour on a 24-hour clock, whatever the format.
    pub const fn hour_24(&self) -> u8 {
        match self.format {
            TimeFormat::TwentyFourHour => self.hours,
            TimeFormat::TwelveHourAm => self.hours % 12,
            TimeFormat::TwelveHourPm => self.hours % 12 + 12,
        }
    }

    /// The same instant expressed in [`TimeFormat::TwentyFourHour`].
    pub const fn to_24_hour(self) -> Time {
        Time {
            hours: self.hour_24(),
            format: TimeFormat::TwentyFourHour,
            ..self
        }
    }

    /// Check every field against the range allowed by its format.
    pub const fn check(&self) -> Result<(), DatetimeError> {
        let hour_ok = if self.format.is_12_hour() {
            self.hours >= 1 && self.hours <= 12
        } else {
            self.hours <= 23
        };
        if !hour_ok {
            return Err(DatetimeError::Hour);
        }

        if self.minutes > 59 {
            return Err(DatetimeError::Minute);
        }

        if self.seconds > 59 {
            return Err(DatetimeError::Second);
        }

        Ok(())
    }
}

/// Day of the week, numbered the way the DS1307 day register is used here.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// 1 for Monday through 7 for Sunday.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a weekday by ordinal. Anything outside 1-7 has no weekday.
    pub const fn from_ordinal(ordinal: u8) -> Option<Weekday> {
        match ordinal {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Three-letter English abbreviation.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> u8 {
        day.ordinal()
    }
}

/// Calendar date within the 2000-2099 century.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Date {
    /// Day of the week, 1 (Monday) to 7 (Sunday).
    pub day: u8,
    /// Day of the month (1-31).
    pub date: u8,
    /// Month (1-12).
    pub month: u8,
    /// Year within the century (0-99), meaning 2000 + `year`.
    pub year: u8,
}

/// Saturday 2000-01-01.
impl Default for Date {
    fn default() -> Self {
        Date {
            day: Weekday::Saturday.ordinal(),
            date: 1,
            month: 1,
            year: 0,
        }
    }
}

impl Date {
    // 1-based indexing number of days in each month; February is adjusted for leap years.
    const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    /// The day register as a [`Weekday`], if it holds a valid ordinal.
    pub const fn weekday(&self) -> Option<Weekday> {
        Weekday::from_ordinal(self.day)
    }

    /// Four-digit year.
    pub const fn full_year(&self) -> u16 {
        2000 + self.year as u16
    }

    /// Check every field, including the day of the month against month length.
    pub const fn check(&self) -> Result<(), DatetimeError> {
        if self.year > 99 {
            return Err(DatetimeError::Year);
        }

        if self.month < 1 || self.month > 12 {
            return Err(DatetimeError::Month);
        }

        let mut days_in_month = Self::DAYS_IN_MONTH[self.month as usize];
        if self.month == 2 && is_leap_year(self.full_year()) {
            days_in_month += 1;
        }
        if self.date < 1 || self.date > days_in_month {
            return Err(DatetimeError::Day);
        }

        if self.weekday().is_none() {
            return Err(DatetimeError::Weekday);
        }

        Ok(())
    }
}

/// Check if a year is a leap year.
const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
/// Represents errors that can occur when checking a date or time.
pub enum DatetimeError {
    /// The year is invalid.
    Year,
    /// The month is invalid.
    Month,
    /// The day of the month is invalid.
    Day,
    /// The day of the week is invalid.
    Weekday,
    /// The hour is invalid for the time format.
    Hour,
    /// The minute is invalid.
    Minute,
    /// The second is invalid.
    Second,
}

/// A checked date and time.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Combine a date and a time, rejecting out-of-range fields.
    pub const fn new(date: Date, time: Time) -> Result<DateTime, DatetimeError> {
        if let Err(e) = date.check() {
            return Err(e);
        }
        if let Err(e) = time.check() {
            return Err(e);
        }
        Ok(DateTime { date, time })
    }

    /// The calendar part.
    pub const fn date(&self) -> Date {
        self.date
    }

    /// The time-of-day part.
    pub const fn time(&self) -> Time {
        self.time
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveTime> for Time {
    fn from(time: chrono::NaiveTime) -> Time {
        // A leap second shows up as second 59 with an oversized nanosecond
        // field, so the seconds value is always in range.
        Time {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            seconds: time.second() as u8,
            format: TimeFormat::TwentyFourHour,
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Time> for chrono::NaiveTime {
    type Error = DatetimeError;

    fn try_from(time: Time) -> Result<chrono::NaiveTime, DatetimeError> {
        time.check()?;
        chrono::NaiveTime::from_hms_opt(time.hour_24() as u32, time.minutes as u32, time.seconds as u32)
            .ok_or(DatetimeError::Hour)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = DatetimeError;

    fn try_from(date: chrono::NaiveDate) -> Result<Date, DatetimeError> {
        if !(2000..=2099).contains(&date.year()) {
            return Err(DatetimeError::Year);
        }

        Ok(Date {
            day: date.weekday().number_from_monday() as u8,
            date: date.day() as u8,
            month: date.month() as u8,
            year: (date.year() - 2000) as u8,
        })
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = DatetimeError;

    /// The weekday register is not cross-checked; chrono derives its own.
    fn try_from(date: Date) -> Result<chrono::NaiveDate, DatetimeError> {
        date.check()?;
        chrono::NaiveDate::from_ymd_opt(date.full_year() as i32, date.month as u32, date.date as u32)
            .ok_or(DatetimeError::Day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDateTime> for DateTime {
    type Error = DatetimeError;

    fn try_from(date_time: chrono::NaiveDateTime) -> Result<DateTime, DatetimeError> {
        let date = Date::try_from(date_time.date())?;
        DateTime::new(date, Time::from(date_time.time()))
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<DateTime> for chrono::NaiveDateTime {
    type Error = DatetimeError;

    fn try_from(date_time: DateTime) -> Result<chrono::NaiveDateTime, DatetimeError> {
        let date = chrono::NaiveDate::try_from(date_time.date)?;
        let time = chrono::NaiveTime::try_from(date_time.time)?;
        Ok(date.and_time(time))
    }
}
