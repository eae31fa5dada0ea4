//! Parsing for the minutes entry field.
//!
//! The widget accepts a duration as minutes, typed as free text. Parsing is
//! the only validation boundary in the crate: everything downstream of
//! [`parse_minutes`] works in whole seconds and cannot fail.

use std::error::Error;
use std::fmt;

/// Upper bound on accepted durations, in minutes (exclusive).
pub const MAX_MINUTES: f64 = 60.0;

/// Why a submitted duration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDuration {
    /// The input was empty or not a number.
    NotANumber,
    /// The input parsed to zero or negative minutes.
    NotPositive,
    /// The input was sixty minutes or more.
    TooLong,
}

impl fmt::Display for InvalidDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            InvalidDuration::NotANumber => "Please set a number",
            InvalidDuration::NotPositive => "Minutes must be greater than zero",
            InvalidDuration::TooLong => "Keep it under 60 minutes",
        };
        f.write_str(msg)
    }
}

impl Error for InvalidDuration {}

/// Parses a minutes string and returns the whole-second equivalent.
///
/// Decimal minutes are accepted: `"2.5"` is two minutes thirty seconds.
/// The result is rounded to the nearest whole second. Surrounding
/// whitespace is ignored.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::duration::{parse_minutes, InvalidDuration};
///
/// assert_eq!(parse_minutes("5"), Ok(300));
/// assert_eq!(parse_minutes("2.5"), Ok(150));
/// assert_eq!(parse_minutes("abc"), Err(InvalidDuration::NotANumber));
/// assert_eq!(parse_minutes("70"), Err(InvalidDuration::TooLong));
/// ```
pub fn parse_minutes(raw: &str) -> Result<u64, InvalidDuration> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidDuration::NotANumber);
    }

    let minutes: f64 = trimmed.parse().map_err(|_| InvalidDuration::NotANumber)?;
    if !minutes.is_finite() {
        return Err(InvalidDuration::NotANumber);
    }
    if minutes <= 0.0 {
        return Err(InvalidDuration::NotPositive);
    }
    if minutes >= MAX_MINUTES {
        return Err(InvalidDuration::TooLong);
    }

    let seconds = (minutes * 60.0).round() as u64;
    if seconds == 0 {
        // Entries like "0.001" round down to nothing worth counting.
        return Err(InvalidDuration::NotPositive);
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_minutes() {
        assert_eq!(parse_minutes("5"), Ok(300));
        assert_eq!(parse_minutes("1"), Ok(60));
        assert_eq!(parse_minutes("59"), Ok(3540));
    }

    #[test]
    fn test_decimal_minutes() {
        assert_eq!(parse_minutes("2.5"), Ok(150));
        assert_eq!(parse_minutes("0.5"), Ok(30));
        // Rounded to the nearest whole second.
        assert_eq!(parse_minutes("0.025"), Ok(2)); // 1.5s rounds up
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(parse_minutes(" 5 "), Ok(300));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_minutes(""), Err(InvalidDuration::NotANumber));
        assert_eq!(parse_minutes("   "), Err(InvalidDuration::NotANumber));
        assert_eq!(parse_minutes("abc"), Err(InvalidDuration::NotANumber));
        assert_eq!(parse_minutes("5m"), Err(InvalidDuration::NotANumber));
        assert_eq!(parse_minutes("nan"), Err(InvalidDuration::NotANumber));
        assert_eq!(parse_minutes("inf"), Err(InvalidDuration::NotANumber));
    }

    #[test]
    fn test_not_positive() {
        assert_eq!(parse_minutes("0"), Err(InvalidDuration::NotPositive));
        assert_eq!(parse_minutes("-5"), Err(InvalidDuration::NotPositive));
        // Rounds to zero seconds.
        assert_eq!(parse_minutes("0.001"), Err(InvalidDuration::NotPositive));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(parse_minutes("60"), Err(InvalidDuration::TooLong));
        assert_eq!(parse_minutes("70"), Err(InvalidDuration::TooLong));
        assert_eq!(parse_minutes("1e3"), Err(InvalidDuration::TooLong));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidDuration::NotANumber.to_string(),
            "Please set a number"
        );
        assert!(InvalidDuration::TooLong.to_string().contains("60"));
    }
}
