//! Scalar function dispatch
//!
//! The row evaluator hands function calls here by name with already
//! evaluated argument values. Names are matched case-insensitively.

pub(crate) mod datetime;

use lunasql_types::SqlValue;

use crate::errors::FunctionError;

/// Evaluate a scalar function on given argument values.
pub fn eval_scalar_function(
    name: &str,
    args: &[SqlValue],
) -> Result<SqlValue, FunctionError> {
    match name.to_uppercase().as_str() {
        // Field extraction
        "YEAR" => datetime::year(args),
        "MONTH" => datetime::month(args),
        "DAY" | "DAYOFMONTH" => datetime::day(args),
        "HOUR" => datetime::hour(args),
        "MINUTE" => datetime::minute(args),
        "SECOND" => datetime::second(args),
        "MICROSECOND" => datetime::microsecond(args),
        "DAYOFYEAR" => datetime::day_of_year(args),
        "DAYOFWEEK" => datetime::day_of_week(args),
        "WEEKDAY" => datetime::weekday(args),
        "DAYNAME" => datetime::day_name(args),
        "MONTHNAME" => datetime::month_name(args),
        "DATE" => datetime::date(args),
        "TIME_TO_SEC" => datetime::time_to_sec(args),

        // Week numbering
        "WEEK" => datetime::week(args),
        "WEEKOFYEAR" => datetime::week_of_year(args),
        "YEARWEEK" => datetime::yearweek(args),

        // Formatting
        "DATE_FORMAT" => datetime::date_format(args),

        // Current date/time
        "CURRENT_DATE" | "CURDATE" => datetime::current_date(args),
        "CURRENT_TIME" | "CURTIME" => datetime::current_time(args),
        "CURRENT_TIMESTAMP" | "NOW" => datetime::current_timestamp(args),

        _ => Err(FunctionError::UnsupportedFeature(format!(
            "Unknown scalar function: {}",
            name
        ))),
    }
}
