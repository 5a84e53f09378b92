//! 12-hour clock markers and conversion to 24-hour values

use log::debug;

use crate::clock_time::ClockTime;
use crate::error::TimeParseError;

/// Which half of a 12-hour clock a time refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Recognize an `AM`/`PM` marker in any letter case.
    pub fn from_marker(marker: &str) -> Option<Self> {
        if marker.eq_ignore_ascii_case("am") {
            Some(Meridiem::Am)
        } else if marker.eq_ignore_ascii_case("pm") {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }
}

/// Validate raw hour/minute values and fold them into a 24-hour [`ClockTime`].
///
/// Without a marker the hour must already be in 24-hour form. With one, the
/// hour must be at most 12; `12 AM` becomes 0 and PM hours other than 12 get
/// 12 added.
pub fn normalize(
    hour: i64,
    minute: i64,
    meridiem: Option<Meridiem>,
) -> Result<ClockTime, TimeParseError> {
    if hour < 0 {
        return Err(TimeParseError::NegativeHour);
    }
    if !(0..=59).contains(&minute) {
        debug!("Rejecting minute {} outside [0..59]", minute);
        return Err(TimeParseError::MinuteOutOfRange(minute));
    }

    let hour = match meridiem {
        None => {
            if hour > 23 {
                debug!("Rejecting 24-hour value {}", hour);
                return Err(TimeParseError::HourOutOfRange24(hour));
            }
            hour
        }
        Some(half) => {
            if hour > 12 {
                debug!("Rejecting 12-hour value {} with {:?}", hour, half);
                return Err(TimeParseError::HourOutOfRange12(hour));
            }
            match (half, hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Am, h) => h,
                (Meridiem::Pm, 12) => 12,
                (Meridiem::Pm, h) => h + 12,
            }
        }
    };

    // Both values are range-checked above.
    Ok(ClockTime::from_validated(hour as u32, minute as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(result: Result<ClockTime, TimeParseError>) -> (u32, u32) {
        let time = result.unwrap();
        (time.hour(), time.minute())
    }

    #[test]
    fn test_from_marker() {
        assert_eq!(Meridiem::from_marker("AM"), Some(Meridiem::Am));
        assert_eq!(Meridiem::from_marker("pm"), Some(Meridiem::Pm));
        assert_eq!(Meridiem::from_marker("aM"), Some(Meridiem::Am));
        assert_eq!(Meridiem::from_marker("A.M."), None);
        assert_eq!(Meridiem::from_marker(""), None);
    }

    #[test]
    fn test_twenty_four_hour_passthrough() {
        assert_eq!(hm(normalize(0, 0, None)), (0, 0));
        assert_eq!(hm(normalize(23, 59, None)), (23, 59));
        assert_eq!(normalize(24, 0, None), Err(TimeParseError::HourOutOfRange24(24)));
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(hm(normalize(12, 0, Some(Meridiem::Am))), (0, 0));
        assert_eq!(hm(normalize(12, 0, Some(Meridiem::Pm))), (12, 0));
        assert_eq!(hm(normalize(0, 0, Some(Meridiem::Am))), (0, 0));
    }

    #[test]
    fn test_twelve_hour_conversion() {
        assert_eq!(hm(normalize(6, 37, Some(Meridiem::Am))), (6, 37));
        assert_eq!(hm(normalize(1, 37, Some(Meridiem::Pm))), (13, 37));
        assert_eq!(hm(normalize(11, 59, Some(Meridiem::Pm))), (23, 59));
    }

    #[test]
    fn test_twelve_hour_range() {
        assert_eq!(normalize(13, 0, Some(Meridiem::Am)), Err(TimeParseError::HourOutOfRange12(13)));
        assert_eq!(normalize(13, 37, Some(Meridiem::Pm)), Err(TimeParseError::HourOutOfRange12(13)));
    }

    #[test]
    fn test_check_order() {
        // Negative hour wins over everything, then minute range, then hour range
        assert_eq!(normalize(-1, 99, Some(Meridiem::Pm)), Err(TimeParseError::NegativeHour));
        assert_eq!(normalize(99, 60, None), Err(TimeParseError::MinuteOutOfRange(60)));
        assert_eq!(normalize(5, -1, None), Err(TimeParseError::MinuteOutOfRange(-1)));
    }
}
