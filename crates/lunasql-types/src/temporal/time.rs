//! SQL TIME type implementation

use std::{cmp::Ordering, fmt, str::FromStr};

/// SQL TIME type - a wall-clock time without date.
///
/// Format: HH:MM:SS or HH:MM:SS.fff. The fractional field is stored at
/// nanosecond resolution; display and the MICROSECOND function truncate to
/// microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    pub hour: u8,        // 0-23
    pub minute: u8,      // 0-59
    pub second: u8,      // 0-59
    pub nanosecond: u32, // 0-999999999
}

impl Time {
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self, String> {
        if hour > 23 {
            return Err(format!("Invalid hour: {}", hour));
        }
        if minute > 59 {
            return Err(format!("Invalid minute: {}", minute));
        }
        if second > 59 {
            return Err(format!("Invalid second: {}", second));
        }
        if nanosecond > 999_999_999 {
            return Err(format!("Invalid nanosecond: {}", nanosecond));
        }
        Ok(Time { hour, minute, second, nanosecond })
    }

    pub const fn midnight() -> Self {
        Time { hour: 0, minute: 0, second: 0, nanosecond: 0 }
    }

    /// Sub-second fraction truncated to microseconds (0-999999).
    pub fn microsecond(&self) -> u32 {
        self.nanosecond / 1_000
    }

    /// Seconds elapsed since midnight, ignoring the sub-second fraction.
    pub fn seconds_from_midnight(&self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

impl FromStr for Time {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (clock, frac) = match s.split_once('.') {
            Some((clock, frac)) => (clock, Some(frac)),
            None => (s, None),
        };

        let mut parts = clock.split(':');
        let (hour, minute, second) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(h), Some(m), Some(sec), None) => (h, m, sec),
            _ => return Err(format!("Invalid time format: '{}' (expected HH:MM:SS)", s)),
        };

        let hour = hour.parse::<u8>().map_err(|_| format!("Invalid hour: '{}'", hour))?;
        let minute = minute.parse::<u8>().map_err(|_| format!("Invalid minute: '{}'", minute))?;
        let second = second.parse::<u8>().map_err(|_| format!("Invalid second: '{}'", second))?;

        // Fractional seconds are right-padded to nanoseconds; extra digits
        // beyond nine are dropped. Only ASCII digits are accepted, so the
        // byte slice below never lands inside a multibyte character.
        let nanosecond = match frac {
            Some(frac) => {
                if !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(format!("Invalid fractional seconds: '{}'", frac));
                }
                let padded = format!("{:0<9}", frac);
                padded[..9]
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid fractional seconds: '{}'", frac))?
            }
            None => 0,
        };

        Time::new(hour, minute, second, nanosecond)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanosecond == 0 {
            write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
        } else {
            let frac = format!("{:09}", self.nanosecond);
            let frac = frac.trim_end_matches('0');
            write!(f, "{:02}:{:02}:{:02}.{}", self.hour, self.minute, self.second, frac)
        }
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hour
            .cmp(&other.hour)
            .then_with(|| self.minute.cmp(&other.minute))
            .then_with(|| self.second.cmp(&other.second))
            .then_with(|| self.nanosecond.cmp(&other.nanosecond))
    }
}
