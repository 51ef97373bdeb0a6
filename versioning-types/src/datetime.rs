use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Calendar date as supplied by the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

impl Date {
    pub const fn new(day: u8, month: u8, year: u16) -> Self {
        Self { day, month, year }
    }
}

/// Wall-clock time as supplied by the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Time {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl DateTime {
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Interpret the fields as a calendar date and time.
    ///
    /// Returns `None` when the fields do not name a real instant, e.g. a zeroed
    /// placeholder or February 30th.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.date.year),
            u32::from(self.date.month),
            u32::from(self.date.day),
        )?;
        let time = NaiveTime::from_hms_opt(
            u32::from(self.time.hour),
            u32::from(self.time.minute),
            u32::from(self.time.second),
        )?;
        Some(NaiveDateTime::new(date, time))
    }
}

impl From<NaiveDateTime> for DateTime {
    /// Sub-second precision is dropped; years outside `0..=65535` are clamped.
    fn from(value: NaiveDateTime) -> Self {
        let year = value.year().clamp(0, i32::from(u16::MAX)) as u16;
        Self {
            date: Date::new(value.day() as u8, value.month() as u8, year),
            time: Time::new(value.hour() as u8, value.minute() as u8, value.second() as u8),
        }
    }
}
