//! Current date/time functions
//!
//! Implements CURRENT_DATE, CURRENT_TIME and CURRENT_TIMESTAMP. The time
//! functions accept an optional fractional-second precision (0-9); without
//! it the sub-second fraction is dropped.

use chrono::{Datelike, Local, Timelike};
use lunasql_types::{Date, SqlValue, Time, Timestamp};

use crate::errors::FunctionError;

/// CURRENT_DATE / CURDATE - current date
pub fn current_date(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    if !args.is_empty() {
        return Err(FunctionError::UnsupportedFeature(
            "CURRENT_DATE takes no arguments".to_string(),
        ));
    }

    let now = Local::now();
    let date = Date::new(now.year(), now.month() as u8, now.day() as u8).map_err(|e| {
        FunctionError::UnsupportedFeature(format!("Failed to create current date: {}", e))
    })?;
    Ok(SqlValue::Date(date))
}

/// CURRENT_TIME / CURTIME - current time, optionally with precision
pub fn current_time(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    let precision = precision_arg("CURRENT_TIME", args)?;
    Ok(SqlValue::Time(clock_time(precision)?))
}

/// CURRENT_TIMESTAMP / NOW - current timestamp, optionally with precision
pub fn current_timestamp(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    let precision = precision_arg("CURRENT_TIMESTAMP", args)?;

    let now = Local::now();
    let date = Date::new(now.year(), now.month() as u8, now.day() as u8)
        .map_err(|e| FunctionError::UnsupportedFeature(format!("Failed to create date: {}", e)))?;
    Ok(SqlValue::Timestamp(Timestamp::new(date, clock_time(precision)?)))
}

fn precision_arg(name: &str, args: &[SqlValue]) -> Result<Option<u32>, FunctionError> {
    match args {
        [] => Ok(None),
        [SqlValue::Integer(n)] if (0..=9).contains(n) => Ok(Some(*n as u32)),
        [SqlValue::Integer(n)] => Err(FunctionError::UnsupportedFeature(format!(
            "{} precision must be 0-9, got {}",
            name, n
        ))),
        [_] => Err(FunctionError::UnsupportedFeature(format!(
            "{} precision must be an integer between 0 and 9",
            name
        ))),
        _ => Err(FunctionError::UnsupportedFeature(format!("{} takes 0 or 1 arguments", name))),
    }
}

fn clock_time(precision: Option<u32>) -> Result<Time, FunctionError> {
    let now = Local::now().time();
    let nanosecond = match precision {
        None => 0,
        Some(prec) => {
            let divisor = 10_u32.pow(9 - prec);
            (now.nanosecond() % 1_000_000_000 / divisor) * divisor
        }
    };

    Time::new(now.hour() as u8, now.minute() as u8, now.second() as u8, nanosecond).map_err(|e| {
        FunctionError::UnsupportedFeature(format!("Failed to create current time: {}", e))
    })
}
