//! The normalized 24-hour clock time value.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeParseError;
use crate::parser;

/// A time of day as hour and minute on a 24-hour clock.
///
/// `hour` is always in `0..=23` and `minute` in `0..=59`; midnight is
/// stored as hour 0, never 12. Values only come out of [`parser::parse`] or
/// the checked [`ClockTime::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Build a time from 24-hour values, rejecting anything off the clock.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        parser::normalize(i64::from(hour), i64::from(minute), None)
    }

    /// Parse a human-written time such as `"6:37 PM"` or `"13:37"`.
    pub fn parse(input: &str) -> Result<Self, TimeParseError> {
        parser::parse(input)
    }

    pub(crate) fn from_validated(hour: u32, minute: u32) -> Self {
        debug_assert!(hour < 24 && minute < 60);
        Self { hour, minute }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since 0:00, in `0..1440`.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Renders as `H:MM`: hour unpadded, minute always two digits.
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(time: ClockTime) -> Self {
        NaiveTime::from_hms_opt(time.hour, time.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Drops seconds and fractions.
impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self::from_validated(time.hour(), time.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parser::parse(&text).map_err(serde::de::Error::custom)
    }
}
