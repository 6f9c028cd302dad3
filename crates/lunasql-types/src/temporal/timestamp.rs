//! SQL TIMESTAMP type implementation

use std::{cmp::Ordering, fmt, str::FromStr};

use super::{Date, Time};

/// SQL TIMESTAMP type - a calendar date and wall-clock time.
///
/// Accepted input formats:
/// - ISO 8601: '2024-01-01T14:30:00' or '2024-01-01T14:30:00.123456'
/// - Space-separated: '2024-01-01 14:30:00'
/// - With timezone suffix (stripped, not converted): '...Z', '...+05:00'
/// - Date only: '2024-01-01' (midnight)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub date: Date,
    pub time: Time,
}

impl Timestamp {
    pub fn new(date: Date, time: Time) -> Self {
        Timestamp { date, time }
    }

    /// The zero instant, 0000-01-01 00:00:00.
    ///
    /// Used as the degradation target when a value cannot be normalized to
    /// a datetime: field extraction over malformed input yields this
    /// instant's fields instead of an error.
    pub const fn zero() -> Self {
        Timestamp {
            date: Date { year: 0, month: 1, day: 1 },
            time: Time::midnight(),
        }
    }
}

impl FromStr for Timestamp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = strip_timezone_suffix(s.trim());

        // ISO 8601 'T' separator
        if let Some((date_str, time_str)) = trimmed.split_once('T') {
            let date = Date::from_str(date_str)?;
            let time = Time::from_str(time_str)?;
            return Ok(Timestamp::new(date, time));
        }

        let mut parts = trimmed.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(date_str), Some(time_str), None) => {
                let date = Date::from_str(date_str)?;
                let time = Time::from_str(time_str)?;
                Ok(Timestamp::new(date, time))
            }
            (Some(date_str), None, _) => {
                // Date-only input assumes midnight
                let date = Date::from_str(date_str)?;
                Ok(Timestamp::new(date, Time::midnight()))
            }
            _ => Err(format!(
                "Invalid timestamp format: '{}'. Supported formats: \
                 ISO 8601 (2024-01-01T14:30:00), space-separated \
                 (2024-01-01 14:30:00), or date only (2024-01-01)",
                s
            )),
        }
    }
}

/// Strip a trailing timezone designator: Z, +HH:MM, -HH:MM, +HHMM, +HH.
///
/// The offset is discarded rather than applied; the library works in
/// civil time throughout.
fn strip_timezone_suffix(s: &str) -> &str {
    if s.ends_with('Z') || s.ends_with('z') {
        return &s[..s.len() - 1];
    }

    // The date part itself contains '-', so only a sign past the YYYY-MM-DD
    // prefix can start an offset.
    if let Some(pos) = s.rfind(['+', '-']) {
        if pos > 10 && is_timezone_offset(&s[pos..]) {
            return &s[..pos];
        }
    }

    s
}

fn is_timezone_offset(s: &str) -> bool {
    let Some(rest) = s.strip_prefix(['+', '-']) else {
        return false;
    };

    match rest.len() {
        // +HH:MM
        5 => {
            rest.as_bytes()[2] == b':'
                && rest[..2].chars().all(|c| c.is_ascii_digit())
                && rest[3..].chars().all(|c| c.is_ascii_digit())
        }
        // +HHMM or +HH
        4 | 2 => rest.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date).then_with(|| self.time.cmp(&other.time))
    }
}
