use core::fmt;

use crate::time::{Date, Time, TimeFormat, Weekday};

/// Three-letter name for a day-register ordinal, `None` outside 1-7.
pub fn weekday_name(ordinal: u8) -> Option<&'static str> {
    Weekday::from_ordinal(ordinal).map(Weekday::abbreviation)
}

/// `hh:mm:ss`, followed by ` AM` or ` PM` in the 12-hour formats.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)?;
        match self.format {
            TimeFormat::TwelveHourAm => f.write_str(" AM"),
            TimeFormat::TwelveHourPm => f.write_str(" PM"),
            TimeFormat::TwentyFourHour => Ok(()),
        }
    }
}

/// `dd/mm/20yy`.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/20{:02}", self.date, self.month, self.year)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_names() {
        let names = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        for (ordinal, name) in (1..=7u8).zip(names) {
            assert_eq!(weekday_name(ordinal), Some(name));
        }
        assert_eq!(weekday_name(0), None);
        assert_eq!(weekday_name(8), None);
        assert_eq!(Weekday::Sunday.to_string(), "Sun");
    }

    #[test]
    fn test_time_display() {
        let pm = Time {
            hours: 11,
            minutes: 59,
            seconds: 41,
            format: TimeFormat::TwelveHourPm,
        };
        assert_eq!(pm.to_string(), "11:59:41 PM");

        let am = Time {
            hours: 4,
            minutes: 5,
            seconds: 9,
            format: TimeFormat::TwelveHourAm,
        };
        assert_eq!(am.to_string(), "04:05:09 AM");

        let full = Time {
            hours: 16,
            minutes: 25,
            seconds: 41,
            format: TimeFormat::TwentyFourHour,
        };
        assert_eq!(full.to_string(), "16:25:41");
    }

    #[test]
    fn test_date_display() {
        let date = Date {
            day: 7,
            date: 31,
            month: 12,
            year: 15,
        };
        assert_eq!(date.to_string(), "31/12/2015");

        let date = Date {
            day: 1,
            date: 2,
            month: 3,
            year: 4,
        };
        assert_eq!(date.to_string(), "02/03/2004");
    }
}
