//! Date/time field extraction functions
//!
//! Implements YEAR, MONTH, DAY, HOUR, MINUTE, SECOND, MICROSECOND,
//! DAYOFYEAR, DAYOFWEEK, WEEKDAY, DAYNAME, MONTHNAME, DATE and TIME_TO_SEC.
//!
//! Every function follows the same contract: NULL in, NULL out; any other
//! argument is normalized to an instant first (degrading to the zero
//! instant on malformed input) and the field is projected from that.

use lunasql_types::{SqlValue, Timestamp};

use super::week::{calc_daynr, calc_weekday};
use crate::{coercion::datetime_value, errors::FunctionError};

/// Weekday names, Sunday first, matching the %w numbering.
pub(crate) const DAY_NAMES: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Shared shell for single-argument field projections.
fn date_part(
    name: &str,
    args: &[SqlValue],
    project: impl Fn(&Timestamp) -> SqlValue,
) -> Result<SqlValue, FunctionError> {
    if args.len() != 1 {
        return Err(FunctionError::UnsupportedFeature(format!(
            "{} requires exactly 1 argument",
            name
        )));
    }

    Ok(match datetime_value(&args[0]) {
        None => SqlValue::Null,
        Some(dt) => project(&dt),
    })
}

/// Day of week with Monday = 0, ..., Sunday = 6 (the WEEKDAY convention).
pub(crate) fn weekday_index(dt: &Timestamp) -> i64 {
    let daynr = calc_daynr(dt.date.year, i32::from(dt.date.month), i32::from(dt.date.day));
    i64::from(calc_weekday(daynr, false))
}

/// Day of week with Sunday = 0, ..., Saturday = 6 (the %w convention).
pub(crate) fn sunday_index(dt: &Timestamp) -> i64 {
    let daynr = calc_daynr(dt.date.year, i32::from(dt.date.month), i32::from(dt.date.day));
    i64::from(calc_weekday(daynr, true))
}

/// YEAR(date) - year of the given date
pub fn year(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("YEAR", args, |dt| SqlValue::Integer(i64::from(dt.date.year)))
}

/// MONTH(date) - month of the given date (1-12)
pub fn month(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("MONTH", args, |dt| SqlValue::Integer(i64::from(dt.date.month)))
}

/// DAY(date) / DAYOFMONTH(date) - day of the month (1-31)
pub fn day(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("DAY", args, |dt| SqlValue::Integer(i64::from(dt.date.day)))
}

/// HOUR(time) - hour of the given datetime (0-23)
pub fn hour(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("HOUR", args, |dt| SqlValue::Integer(i64::from(dt.time.hour)))
}

/// MINUTE(time) - minute of the given datetime (0-59)
pub fn minute(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("MINUTE", args, |dt| SqlValue::Integer(i64::from(dt.time.minute)))
}

/// SECOND(time) - second of the given datetime (0-59)
pub fn second(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("SECOND", args, |dt| SqlValue::Integer(i64::from(dt.time.second)))
}

/// MICROSECOND(time) - sub-second fraction in microseconds (0-999999)
pub fn microsecond(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("MICROSECOND", args, |dt| SqlValue::Integer(i64::from(dt.time.microsecond())))
}

/// DAYOFYEAR(date) - 1-based ordinal day within the year (1-366)
pub fn day_of_year(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("DAYOFYEAR", args, |dt| SqlValue::Integer(i64::from(dt.date.day_of_year())))
}

/// DAYOFWEEK(date) - 1 = Sunday, ..., 7 = Saturday
///
/// Note the anchor difference from WEEKDAY: the two conventions serve
/// different SQL functions and both must be kept.
pub fn day_of_week(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("DAYOFWEEK", args, |dt| SqlValue::Integer(sunday_index(dt) + 1))
}

/// WEEKDAY(date) - 0 = Monday, ..., 6 = Sunday
pub fn weekday(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("WEEKDAY", args, |dt| SqlValue::Integer(weekday_index(dt)))
}

/// DAYNAME(date) - English weekday name
pub fn day_name(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("DAYNAME", args, |dt| {
        SqlValue::Varchar(DAY_NAMES[sunday_index(dt) as usize].to_string())
    })
}

/// MONTHNAME(date) - English month name
pub fn month_name(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("MONTHNAME", args, |dt| {
        SqlValue::Varchar(MONTH_NAMES[(dt.date.month - 1) as usize].to_string())
    })
}

/// DATE(expr) - date part of a datetime expression
pub fn date(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    date_part("DATE", args, |dt| SqlValue::Date(dt.date))
}

/// TIME_TO_SEC(time) - seconds elapsed since midnight
pub fn time_to_sec(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    if args.len() != 1 {
        return Err(FunctionError::UnsupportedFeature(
            "TIME_TO_SEC requires exactly 1 argument".to_string(),
        ));
    }

    // A bare TIME value carries no calendar date, so it never goes through
    // datetime normalization.
    if let SqlValue::Time(t) = &args[0] {
        return Ok(SqlValue::Integer(i64::from(t.seconds_from_midnight())));
    }

    date_part("TIME_TO_SEC", args, |dt| {
        SqlValue::Integer(i64::from(dt.time.seconds_from_midnight()))
    })
}
