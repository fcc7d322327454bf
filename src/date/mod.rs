// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, LocalResult, TimeZone, Timelike, Utc};

use self::builder::ZipDateTimeBuilder;

// https://learn.microsoft.com/en-us/windows/win32/api/oleauto/nf-oleauto-dosdatetimetovarianttime
pub(crate) const YEAR: Field = Field { mask: 0xFE00, shift: 9 };
pub(crate) const MONTH: Field = Field { mask: 0x01E0, shift: 5 };
pub(crate) const DAY: Field = Field { mask: 0x001F, shift: 0 };
pub(crate) const HOUR: Field = Field { mask: 0xF800, shift: 11 };
pub(crate) const MINUTE: Field = Field { mask: 0x07E0, shift: 5 };
pub(crate) const SECOND: Field = Field { mask: 0x001F, shift: 0 };

/// A bit range within a packed MS-DOS date or time.
pub(crate) struct Field {
    mask: u16,
    shift: u32,
}

impl Field {
    fn get(&self, packed: u16) -> u32 {
        ((packed & self.mask) >> self.shift).into()
    }

    /// Replaces this field within a packed value, clamping the component to the field's width.
    pub(crate) fn set(&self, packed: u16, value: u32) -> u16 {
        let max = (self.mask >> self.shift) as u32;
        (packed & !self.mask) | ((value.min(max) as u16) << self.shift)
    }
}

/// The packed date used for entries created without an explicit date (1980-01-01).
pub const DATE_NORMAL: u16 = 0x21;

/// The packed time used for entries created without an explicit time (00:00:00).
pub const TIME_NORMAL: u16 = 0x00;

/// A date and time stored as per the MS-DOS representation used by ZIP files.
///
/// Entries keep these as raw codes; this type only interprets them on request.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl Default for ZipDateTime {
    fn default() -> Self {
        Self { date: DATE_NORMAL, time: TIME_NORMAL }
    }
}

impl ZipDateTime {
    /// Constructs a date & time from its raw packed codes.
    pub fn from_raw(date: u16, time: u16) -> Self {
        Self { date, time }
    }

    /// Returns the raw packed date code.
    pub fn raw_date(&self) -> u16 {
        self.date
    }

    /// Returns the raw packed time code.
    pub fn raw_time(&self) -> u16 {
        self.time
    }

    /// Returns the year of this date & time.
    pub fn year(&self) -> i32 {
        YEAR.get(self.date) as i32 + 1980
    }

    /// Returns the month of this date & time.
    pub fn month(&self) -> u32 {
        MONTH.get(self.date)
    }

    /// Returns the day of this date & time.
    pub fn day(&self) -> u32 {
        DAY.get(self.date)
    }

    /// Returns the hour of this date & time.
    pub fn hour(&self) -> u32 {
        HOUR.get(self.time)
    }

    /// Returns the minute of this date & time.
    pub fn minute(&self) -> u32 {
        MINUTE.get(self.time)
    }

    /// Returns the second of this date & time.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(&self) -> u32 {
        SECOND.get(self.time) << 1
    }

    /// Constructs chrono's [`DateTime`] representation of this date & time.
    ///
    /// Note that this requires the `chrono` feature.
    #[cfg(feature = "chrono")]
    pub fn as_chrono(&self) -> LocalResult<DateTime<Utc>> {
        self.into()
    }

    /// Constructs this date & time from chrono's [`DateTime`] representation.
    ///
    /// Note that this requires the `chrono` feature.
    #[cfg(feature = "chrono")]
    pub fn from_chrono(dt: &DateTime<Utc>) -> Self {
        dt.into()
    }
}

impl From<ZipDateTimeBuilder> for ZipDateTime {
    fn from(builder: ZipDateTimeBuilder) -> Self {
        builder.0
    }
}

#[cfg(feature = "chrono")]
impl From<&DateTime<Utc>> for ZipDateTime {
    fn from(value: &DateTime<Utc>) -> Self {
        ZipDateTimeBuilder::new()
            .year(value.date_naive().year())
            .month(value.date_naive().month())
            .day(value.date_naive().day())
            .hour(value.time().hour())
            .minute(value.time().minute())
            .second(value.time().second())
            .build()
    }
}

#[cfg(feature = "chrono")]
impl From<&ZipDateTime> for LocalResult<DateTime<Utc>> {
    fn from(value: &ZipDateTime) -> Self {
        Utc.with_ymd_and_hms(value.year(), value.month(), value.day(), value.hour(), value.minute(), value.second())
    }
}

#[cfg(feature = "chrono")]
impl From<DateTime<Utc>> for ZipDateTime {
    fn from(value: DateTime<Utc>) -> Self {
        (&value).into()
    }
}
