//! Time module for resolving instants into ephemeris epochs
//!
//! An [`Epoch`] is the signed number of days elapsed since J2000.0
//! (2000-01-01 12:00 UTC). It is built from a chrono `DateTime<Utc>` or a
//! [`CalendarTuple`] and feeds the orbital element model through
//! [`Epoch::centuries`].
//!
//! The wall clock is never read implicitly: callers that want "now" pass a
//! [`Clock`], normally [`SystemClock`], and tests pass a [`FixedClock`].

pub mod calendar;

use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid calendar date: {0}")]
    InvalidCalendar(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Calendar tuple for representing a UTC date and time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarTuple {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarTuple {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Calendar fields of a UTC datetime, with nanoseconds folded into `second`
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1_000_000_000.0,
        }
    }

    /// Validate the fields and build the corresponding UTC datetime
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidCalendar(format!(
                "second {} outside [0, 60)",
                self.second
            )));
        }
        let whole = self.second.floor();
        let nanos = (((self.second - whole) * 1_000_000_000.0).round() as u32).min(999_999_999);

        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| TimeError::InvalidCalendar(self.to_string()))
    }
}

impl fmt::Display for CalendarTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl From<(i32, u32, u32, u32, u32, f64)> for CalendarTuple {
    fn from(tuple: (i32, u32, u32, u32, u32, f64)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3, tuple.4, tuple.5)
    }
}

impl From<(i32, u32, u32)> for CalendarTuple {
    fn from(date: (i32, u32, u32)) -> Self {
        Self::new(date.0, date.1, date.2, 0, 0, 0.0)
    }
}

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The host's wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Days elapsed since the J2000.0 epoch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Epoch {
    days_since_j2000: f64,
}

impl Epoch {
    /// The J2000.0 reference instant itself
    pub fn j2000() -> Self {
        Self::from_days(0.0)
    }

    pub fn from_days(days_since_j2000: f64) -> Self {
        Self { days_since_j2000 }
    }

    /// Resolve a UTC instant
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let cal = CalendarTuple::from_datetime(&dt);
        Self::from_days(calendar::days_since_j2000(
            cal.year, cal.month, cal.day, cal.hour, cal.minute, cal.second,
        ))
    }

    /// Resolve a UTC calendar tuple, rejecting dates that do not exist
    pub fn from_calendar<T: Into<CalendarTuple>>(date: T) -> Result<Self> {
        let cal: CalendarTuple = date.into();
        cal.to_datetime()?;
        Ok(Self::from_days(calendar::days_since_j2000(
            cal.year, cal.month, cal.day, cal.hour, cal.minute, cal.second,
        )))
    }

    /// Resolve the instant reported by `clock`
    pub fn now<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::from_datetime(clock.now())
    }

    pub fn days_since_j2000(&self) -> f64 {
        self.days_since_j2000
    }

    /// Julian centuries since J2000.0, the time argument of the element model
    pub fn centuries(&self) -> f64 {
        self.days_since_j2000 / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian date (UTC-based)
    pub fn julian_date(&self) -> f64 {
        J2000 + self.days_since_j2000
    }
}

impl From<DateTime<Utc>> for Epoch {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J2000{:+.6}d", self.days_since_j2000)
    }
}

impl Sub<Epoch> for Epoch {
    type Output = f64;

    fn sub(self, other: Epoch) -> Self::Output {
        self.days_since_j2000 - other.days_since_j2000
    }
}
