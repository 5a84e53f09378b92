//! Error type for clock-time parsing.

/// Reasons a clock-time string can be rejected.
///
/// Every variant is a pure function of the input text; none of them is
/// worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    /// The input does not look like `hour[:minute][AM|PM]` at all.
    #[error("invalid time string: {0:?}")]
    InvalidFormat(String),
    #[error("non-numeric hour {0:?}")]
    NonNumericHour(String),
    #[error("non-numeric minute {0:?}")]
    NonNumericMinute(String),
    #[error("hour cannot be < 0")]
    NegativeHour,
    #[error("minute must be in range [0..59], got {0}")]
    MinuteOutOfRange(i64),
    /// No meridiem marker was given and the hour is past 23.
    #[error("hour in 24-hour format cannot be > 23, got {0}")]
    HourOutOfRange24(i64),
    /// An AM/PM marker was given and the hour is past 12.
    #[error("hour in 12-hour format cannot be > 12, got {0}")]
    HourOutOfRange12(i64),
}
