//! Grammar matcher for clock-time strings
//!
//! Accepts `hour[:minute][AM|PM]` with optional surrounding whitespace and
//! optional whitespace before the marker. The pattern is compiled once and
//! shared read-only by every caller.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use super::meridiem::Meridiem;

/// `^ws* hour(:minute)? ws* (AM|PM)? ws*$`, with a case-insensitive marker.
///
/// Digits are ASCII only, so everything captured in groups 1 and 2 is
/// guaranteed to parse as an integer. Whitespace is ASCII tab, newline, form
/// feed, carriage return and space; other Unicode spaces are not accepted.
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t\n\f\r ]*([0-9]{1,2})(?::([0-9]{2}))?[\t\n\f\r ]*((?i:AM|PM))?[\t\n\f\r ]*$")
        .expect("time grammar is a valid regex")
});

/// Pieces of an input that matched the time grammar, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeMatch<'a> {
    /// One or two hour digits.
    pub hour: &'a str,
    /// Two minute digits, if a `:` field was present.
    pub minute: Option<&'a str>,
    pub meridiem: Option<Meridiem>,
}

/// Match `input` against the grammar as a whole.
///
/// Returns `None` when the input is not a clock time at all: empty or blank
/// strings, a missing hour, a sign, a one-digit minute, stray characters.
pub fn match_time(input: &str) -> Option<TimeMatch<'_>> {
    let caps = TIME_PATTERN.captures(input)?;

    // Group 1 is mandatory in the pattern, so a match always carries it.
    let hour = caps.get(1)?.as_str();
    let minute = caps.get(2).map(|m| m.as_str());
    let meridiem = caps.get(3).and_then(|m| Meridiem::from_marker(m.as_str()));

    trace!("Grammar matched {:?}: hour={:?} minute={:?} meridiem={:?}", input, hour, minute, meridiem);
    Some(TimeMatch { hour, minute, meridiem })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_full_form() {
        let m = match_time(" 6:37  PM ").unwrap();
        assert_eq!(m.hour, "6");
        assert_eq!(m.minute, Some("37"));
        assert_eq!(m.meridiem, Some(Meridiem::Pm));
    }

    #[test]
    fn test_match_bare_hour() {
        let m = match_time("0").unwrap();
        assert_eq!(m, TimeMatch { hour: "0", minute: None, meridiem: None });
    }

    #[test]
    fn test_match_marker_without_space() {
        let m = match_time("1:37PM").unwrap();
        assert_eq!(m.minute, Some("37"));
        assert_eq!(m.meridiem, Some(Meridiem::Pm));

        let m = match_time("12am").unwrap();
        assert_eq!(m.hour, "12");
        assert_eq!(m.meridiem, Some(Meridiem::Am));
    }

    #[test]
    fn test_match_keeps_out_of_range_values() {
        // Range checks happen after matching
        let m = match_time("99:99").unwrap();
        assert_eq!(m.hour, "99");
        assert_eq!(m.minute, Some("99"));
    }

    #[test]
    fn test_match_ascii_whitespace_only() {
        assert!(match_time("\t6:37\r\n").is_some());
        assert!(match_time("\x0C6 PM").is_some());

        for input in ["\u{a0}6:37 PM", "6:37\u{3000}PM", "\u{b}6", "6\u{2003}AM", "6:37\u{85}"] {
            assert!(match_time(input).is_none(), "Unexpected match for {:?}", input);
        }
    }

    #[test]
    fn test_no_match() {
        let inputs = [
            "", "   ", ":37 PM", "-13:37", "123", "1:3", "1:345", "6:37 XM", "6:37 P M", "6.37",
            "six", "6:37 PM later", "+6",
        ];
        for input in inputs {
            assert!(match_time(input).is_none(), "Unexpected match for {:?}", input);
        }
    }
}
