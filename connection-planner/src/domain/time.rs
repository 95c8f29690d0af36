//! Wall-clock time handling.
//!
//! Travellers give times as "HH:MM" in the local zone. Everything downstream
//! works on UTC instants, so the conversion happens once, here, and refuses
//! local times that daylight saving makes nonexistent or ambiguous.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

/// Error returned when a wall-clock time cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("invalid time: {0}")]
    Invalid(&'static str),

    /// The local time falls in a daylight-saving gap.
    #[error("{0} does not exist in the local time zone")]
    Nonexistent(String),

    /// The local time occurs twice when clocks go back.
    #[error("{0} is ambiguous in the local time zone")]
    Ambiguous(String),
}

/// Parse a time from "HH:MM" format.
///
/// # Examples
///
/// ```
/// use connection_planner::domain::parse_hhmm;
///
/// assert!(parse_hhmm("00:00").is_ok());
/// assert!(parse_hhmm("23:59").is_ok());
///
/// assert!(parse_hhmm("1430").is_err());
/// assert!(parse_hhmm("14:3").is_err());
/// assert!(parse_hhmm("25:00").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    // Must be exactly 5 characters: HH:MM
    if s.len() != 5 {
        return Err(TimeError::Invalid("expected HH:MM format"));
    }

    let bytes = s.as_bytes();

    if bytes[2] != b':' {
        return Err(TimeError::Invalid("expected colon at position 2"));
    }

    let hour = parse_two_digits(&bytes[0..2]).ok_or(TimeError::Invalid("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::Invalid("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or(TimeError::Invalid("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::Invalid("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeError::Invalid("invalid time"))
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        }
        _ => None,
    }
}

/// Interpret a local date and time in `tz` and return the UTC instant.
pub fn local_to_utc<Tz: TimeZone>(
    date: NaiveDate,
    time: NaiveTime,
    tz: &Tz,
) -> Result<DateTime<Utc>, TimeError> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => Err(TimeError::Nonexistent(naive.to_string())),
        LocalResult::Ambiguous(_, _) => Err(TimeError::Ambiguous(naive.to_string())),
    }
}
