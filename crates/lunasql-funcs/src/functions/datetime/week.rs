//! Week numbering functions
//!
//! Implements WEEK, WEEKOFYEAR and YEARWEEK, plus the mode-driven week
//! calculator they share. MySQL week modes 0-7 decompose into three
//! independent conventions (first day of week, permitted week range, and
//! the rule defining week 1); the calculator reproduces that behavior
//! exactly, including the year-boundary cases where a date belongs to a
//! week of the previous or next calendar year.

use lunasql_types::SqlValue;

use super::extract;
use crate::{coercion::datetime_value, errors::FunctionError};

/// Week numbering conventions, decomposed from a SQL week mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBehaviour(u8);

impl WeekBehaviour {
    /// Monday is the first day of the week; otherwise Sunday.
    pub const MONDAY_FIRST: WeekBehaviour = WeekBehaviour(1);
    /// Weeks are numbered 1-53; otherwise 0-53 with a partial week 0.
    pub const YEAR_RANGE: WeekBehaviour = WeekBehaviour(2);
    /// Week 1 is the first week containing the first day of the week;
    /// otherwise the ISO 8601 rule (week 1 holds four or more January days).
    pub const FIRST_WEEKDAY: WeekBehaviour = WeekBehaviour(4);

    pub fn contains(self, flag: WeekBehaviour) -> bool {
        self.0 & flag.0 != 0
    }
}

impl std::ops::BitOr for WeekBehaviour {
    type Output = WeekBehaviour;

    fn bitor(self, rhs: WeekBehaviour) -> WeekBehaviour {
        WeekBehaviour(self.0 | rhs.0)
    }
}

/// Decompose a pre-normalized SQL week mode (0-7) into behaviour flags.
///
/// When Monday-first is unset the week-1 rule flips: Sunday-first modes
/// without the flag use the first-weekday rule, with it the ISO rule.
pub fn week_mode(mode: i64) -> WeekBehaviour {
    let mut flags = (mode & 7) as u8;
    if flags & WeekBehaviour::MONDAY_FIRST.0 == 0 {
        flags ^= WeekBehaviour::FIRST_WEEKDAY.0;
    }
    WeekBehaviour(flags)
}

/// Proleptic Gregorian day count for (year, month, day).
///
/// Any monotonic day-number function works as long as it agrees with
/// itself; this is the classic one counting days since year 0.
pub(crate) fn calc_daynr(year: i32, month: i32, day: i32) -> i32 {
    if year == 0 && month == 0 {
        return 0;
    }

    let mut delsum = 365 * year + 31 * (month - 1) + day;
    let mut y = year;
    if month <= 2 {
        y -= 1;
    } else {
        delsum -= (month * 4 + 23) / 10;
    }
    delsum + y / 4 - ((y / 100 + 1) * 3) / 4
}

/// Weekday for a day number: 0 = Monday, ..., 6 = Sunday, or with
/// `sunday_first` 0 = Sunday, ..., 6 = Saturday.
pub(crate) fn calc_weekday(daynr: i32, sunday_first: bool) -> i32 {
    let shift = if sunday_first { 6 } else { 5 };
    (daynr + shift) % 7
}

fn calc_days_in_year(year: i32) -> i32 {
    if (year & 3) == 0 && (year % 100 != 0 || (year % 400 == 0 && year != 0)) {
        366
    } else {
        365
    }
}

/// Week number and week year for a date under the given behaviour.
///
/// The returned year may be one less or one more than the calendar year
/// when the date falls in a transitional week. Week 0 is returned only
/// when the behaviour permits a partial first week.
pub fn calc_week(year: i32, month: i32, day: i32, behaviour: WeekBehaviour) -> (i32, i32) {
    let daynr = calc_daynr(year, month, day);
    let mut first_daynr = calc_daynr(year, 1, 1);
    let monday_first = behaviour.contains(WeekBehaviour::MONDAY_FIRST);
    let mut year_range = behaviour.contains(WeekBehaviour::YEAR_RANGE);
    let first_weekday = behaviour.contains(WeekBehaviour::FIRST_WEEKDAY);

    let mut week_year = year;
    let mut weekday = calc_weekday(first_daynr, !monday_first);

    // Dates in the first seven days of January may belong to the last week
    // of the previous year.
    if month == 1 && day <= 7 - weekday {
        if !year_range && ((first_weekday && weekday != 0) || (!first_weekday && weekday >= 4)) {
            return (week_year, 0);
        }
        year_range = true;
        week_year -= 1;
        let prev_days = calc_days_in_year(week_year);
        first_daynr -= prev_days;
        weekday = (weekday + 53 * 7 - prev_days) % 7;
    }

    let days = if (first_weekday && weekday != 0) || (!first_weekday && weekday >= 4) {
        daynr - (first_daynr + 7 - weekday)
    } else {
        daynr - (first_daynr - weekday)
    };

    // Dates in the last week may already belong to week 1 of the next year.
    if year_range && days >= 52 * 7 {
        let end_weekday = (weekday + calc_days_in_year(week_year)) % 7;
        if (!first_weekday && end_weekday < 4) || (first_weekday && end_weekday == 0) {
            return (week_year + 1, 1);
        }
    }

    (week_year, days / 7 + 1)
}

/// Extract an i32 calendar field from an extractor result.
///
/// A non-integer here means a broken internal contract, so it surfaces as
/// an error naming the field rather than degrading.
fn field_i32(
    function: &str,
    field: &str,
    value: SqlValue,
) -> Result<Option<i32>, FunctionError> {
    match value {
        SqlValue::Null => Ok(None),
        SqlValue::Integer(n) => {
            i32::try_from(n).map(Some).map_err(|_| FunctionError::InvalidArgument {
                function: function.to_string(),
                detail: format!("invalid {}", field),
            })
        }
        other => Err(FunctionError::InvalidArgument {
            function: function.to_string(),
            detail: format!("invalid {}: {}", field, other),
        }),
    }
}

/// Week mode from the optional second argument.
///
/// Out-of-range integers are taken modulo 8 here, before the calculator
/// sees them; non-integer modes fall back to 0.
fn mode_arg(args: &[SqlValue]) -> i64 {
    match args.get(1) {
        Some(value) => match value.as_integer() {
            Some(mode) => mode.rem_euclid(8),
            None => 0,
        },
        None => 0,
    }
}

fn week_fields(
    function: &str,
    args: &[SqlValue],
) -> Result<Option<(i32, i32, i32)>, FunctionError> {
    let date_arg = std::slice::from_ref(&args[0]);
    let Some(yyyy) = field_i32(function, "year", extract::year(date_arg)?)? else {
        return Ok(None);
    };
    let Some(mm) = field_i32(function, "month", extract::month(date_arg)?)? else {
        return Ok(None);
    };
    let Some(dd) = field_i32(function, "day", extract::day(date_arg)?)? else {
        return Ok(None);
    };
    Ok(Some((yyyy, mm, dd)))
}

/// WEEK(date[, mode]) - week number of the date
///
/// The week-year is always computed, then folded back into the 0-53 range:
/// a date in the previous year's last week reports 0, a date in the next
/// year's week 1 reports 53.
pub fn week(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    if args.is_empty() || args.len() > 2 {
        return Err(FunctionError::UnsupportedFeature(format!(
            "WEEK requires 1 or 2 arguments, got {}",
            args.len()
        )));
    }

    let Some((yyyy, mm, dd)) = week_fields("WEEK", args)? else {
        return Ok(SqlValue::Null);
    };

    let behaviour = week_mode(mode_arg(args)) | WeekBehaviour::YEAR_RANGE;
    let (week_year, week) = calc_week(yyyy, mm, dd, behaviour);

    let week = if week_year < yyyy {
        0
    } else if week_year > yyyy {
        53
    } else {
        week
    };
    Ok(SqlValue::Integer(i64::from(week)))
}

/// WEEKOFYEAR(date) - ISO 8601 calendar week (1-53)
///
/// Unlike WEEK(date, 3) this never folds to 0 or 53 at year boundaries;
/// the ISO week of the owning week-year is reported as-is.
pub fn week_of_year(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    if args.len() != 1 {
        return Err(FunctionError::UnsupportedFeature(
            "WEEKOFYEAR requires exactly 1 argument".to_string(),
        ));
    }

    let Some((yyyy, mm, dd)) = week_fields("WEEKOFYEAR", args)? else {
        return Ok(SqlValue::Null);
    };

    let (_, week) = calc_week(yyyy, mm, dd, week_mode(3));
    Ok(SqlValue::Integer(i64::from(week)))
}

/// YEARWEEK(date[, mode]) - week year and week combined as yyyyww
///
/// The year in the result may differ from the calendar year of the date
/// for the first and last week of the year.
pub fn yearweek(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    if args.is_empty() || args.len() > 2 {
        return Err(FunctionError::UnsupportedFeature(format!(
            "YEARWEEK requires 1 or 2 arguments, got {}",
            args.len()
        )));
    }

    let Some((yyyy, mm, dd)) = week_fields("YEARWEEK", args)? else {
        return Ok(SqlValue::Null);
    };

    let behaviour = week_mode(mode_arg(args)) | WeekBehaviour::YEAR_RANGE;
    let (week_year, week) = calc_week(yyyy, mm, dd, behaviour);

    Ok(SqlValue::Integer(i64::from(week_year) * 100 + i64::from(week)))
}
