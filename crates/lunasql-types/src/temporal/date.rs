//! SQL DATE type implementation

use std::{cmp::Ordering, fmt, str::FromStr};

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// SQL DATE type - a calendar date without time.
///
/// Format: YYYY-MM-DD. Stored as components so comparison and field
/// extraction need no calendar conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub year: i32,
    pub month: u8, // 1-12
    pub day: u8,   // 1-31
}

impl Date {
    /// Create a new Date. The year is capped at 9999 so downstream day-count
    /// arithmetic stays within i32; month and day must fall in their calendar
    /// ranges, including the month length (Feb 30 is rejected).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, String> {
        if !(0..=9999).contains(&year) {
            return Err(format!("Invalid year: {}", year));
        }
        if !(1..=12).contains(&month) {
            return Err(format!("Invalid month: {}", month));
        }
        if day < 1 || day > Self::days_in_month(year, month) {
            return Err(format!("Invalid day: {}", day));
        }
        Ok(Date { year, month, day })
    }

    pub fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Number of days in the given month of the given year.
    pub fn days_in_month(year: i32, month: u8) -> u8 {
        if month == 2 && Self::is_leap_year(year) {
            29
        } else {
            DAYS_IN_MONTH[(month - 1) as usize]
        }
    }

    /// 1-based ordinal day within the year (1-366).
    pub fn day_of_year(&self) -> u32 {
        let mut doy = u32::from(self.day);
        for m in 1..self.month {
            doy += u32::from(Self::days_in_month(self.year, m));
        }
        doy
    }
}

impl FromStr for Date {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) => (y, m, d),
            _ => return Err(format!("Invalid date format: '{}' (expected YYYY-MM-DD)", s)),
        };

        let year = year.parse::<i32>().map_err(|_| format!("Invalid year: '{}'", year))?;
        let month = month.parse::<u8>().map_err(|_| format!("Invalid month: '{}'", month))?;
        let day = day.parse::<u8>().map_err(|_| format!("Invalid day: '{}'", day))?;

        Date::new(year, month, day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
            .then_with(|| self.day.cmp(&other.day))
    }
}
