/// Clock-time parser module
///
/// Turns strings such as "6:37 PM", "0" or "13:37" into a normalized
/// 24-hour [`ClockTime`].
pub mod grammar;
pub mod meridiem;

use log::{debug, trace};

use crate::clock_time::ClockTime;
use crate::error::TimeParseError;

pub use grammar::{match_time, TimeMatch};
pub use meridiem::{normalize, Meridiem};

/// Parse a time in `hour[:minute][AM|PM]` form.
///
/// Minutes default to 0. Without a marker the hour is read as 24-hour time;
/// with `AM`/`PM` (any case) it is read as 12-hour time and converted.
///
/// The grammar only captures ASCII digits and requires exactly two minute
/// digits after a `:`, so [`TimeParseError::NonNumericHour`],
/// [`TimeParseError::NonNumericMinute`] and [`TimeParseError::NegativeHour`]
/// cannot come out of this function; malformed digits surface as
/// [`TimeParseError::InvalidFormat`].
///
/// # Examples
///
/// ```
/// let time = clocktime::parse("1:37 PM").unwrap();
/// assert_eq!(time.to_string(), "13:37");
///
/// assert!(clocktime::parse("13:37 PM").is_err());
/// ```
pub fn parse(input: &str) -> Result<ClockTime, TimeParseError> {
    trace!("Parsing time string {:?}", input);

    let Some(matched) = match_time(input) else {
        debug!("Time string {:?} does not match the grammar", input);
        return Err(TimeParseError::InvalidFormat(input.to_string()));
    };

    let hour = matched
        .hour
        .parse::<i64>()
        .map_err(|_| TimeParseError::NonNumericHour(matched.hour.to_string()))?;

    let minute = match matched.minute {
        Some(text) if !text.is_empty() => text
            .parse::<i64>()
            .map_err(|_| TimeParseError::NonNumericMinute(text.to_string()))?,
        _ => 0,
    };

    let time = normalize(hour, minute, matched.meridiem)?;
    debug!("Parsed {:?} as {}", input, time);
    Ok(time)
}
