//! DATE_FORMAT and the strftime-style specifier table
//!
//! A format string is scanned left to right; `%` introduces a two-character
//! specifier. Recognized specifiers render a field of the instant; an
//! unrecognized specifier emits only the character after the `%`, dropping
//! the `%` itself. Every other character copies through literally. The
//! specifier table is fixed at compile time and never mutated.

use lunasql_types::{SqlValue, Timestamp};

use super::extract::{sunday_index, DAY_NAMES, MONTH_NAMES};
use super::week::{calc_week, week_mode};
use crate::{coercion::datetime_value, errors::FunctionError};

/// DATE_FORMAT(date, format) - format a datetime per the specifier table
pub fn date_format(args: &[SqlValue]) -> Result<SqlValue, FunctionError> {
    if args.len() != 2 {
        return Err(FunctionError::UnsupportedFeature(format!(
            "DATE_FORMAT requires exactly 2 arguments, got {}",
            args.len()
        )));
    }

    if args[1].is_null() {
        return Ok(SqlValue::Null);
    }
    let format = match &args[1] {
        SqlValue::Varchar(s) | SqlValue::Character(s) => s,
        other => {
            return Err(FunctionError::TypeMismatch {
                left: other.clone(),
                op: "DATE_FORMAT".to_string(),
                right: SqlValue::Null,
            })
        }
    };

    Ok(match datetime_value(&args[0]) {
        None => SqlValue::Null,
        Some(dt) => SqlValue::Varchar(format_date(format, &dt)),
    })
}

/// Render an instant through a format string.
pub fn format_date(format: &str, t: &Timestamp) -> String {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // A trailing lone '%' copies through
            None => out.push('%'),
            Some(spec) => match render_specifier(spec, t) {
                Some(rendered) => out.push_str(&rendered),
                // Unrecognized: the '%' is dropped, the letter kept
                None => out.push(spec),
            },
        }
    }

    out
}

fn render_specifier(spec: char, t: &Timestamp) -> Option<String> {
    let date = &t.date;
    let time = &t.time;

    let rendered = match spec {
        'a' => DAY_NAMES[sunday_index(t) as usize][..3].to_string(),
        'b' => MONTH_NAMES[usize::from(date.month) - 1][..3].to_string(),
        'c' => date.month.to_string(),
        'D' => format!("{}{}", date.day, ordinal_suffix(date.day)),
        'd' => format!("{:02}", date.day),
        'e' => date.day.to_string(),
        'f' => format!("{:06}", time.microsecond()),
        'H' => format!("{:02}", time.hour),
        'h' | 'I' => format!("{:02}", hour_12(time.hour)),
        'i' => format!("{:02}", time.minute),
        'j' => format!("{:03}", date.day_of_year()),
        'k' => time.hour.to_string(),
        'l' => hour_12(time.hour).to_string(),
        'M' => MONTH_NAMES[usize::from(date.month) - 1].to_string(),
        'm' => format!("{:02}", date.month),
        'p' => meridiem(time.hour).to_string(),
        'r' => format!(
            "{:02}:{:02}:{:02} {}",
            hour_12(time.hour),
            time.minute,
            time.second,
            meridiem(time.hour)
        ),
        'S' | 's' => format!("{:02}", time.second),
        'T' => format!("{:02}:{:02}:{:02}", time.hour, time.minute, time.second),
        'U' => format!("{:02}", token_week(t, 0).1),
        'u' => format!("{:02}", token_week(t, 1).1),
        'V' => format!("{:02}", token_week(t, 2).1),
        'v' => format!("{:02}", token_week(t, 3).1),
        'W' => DAY_NAMES[sunday_index(t) as usize].to_string(),
        'w' => sunday_index(t).to_string(),
        'X' => format!("{:04}", token_week(t, 2).0),
        'x' => format!("{:04}", token_week(t, 3).0),
        'Y' => format!("{:04}", date.year),
        'y' => format!("{:02}", date.year.rem_euclid(100)),
        _ => return None,
    };
    Some(rendered)
}

/// Week tokens pin the mode: %U=0, %u=1, %V/%X=2, %v/%x=3.
fn token_week(t: &Timestamp, mode: i64) -> (i32, i32) {
    calc_week(t.date.year, i32::from(t.date.month), i32::from(t.date.day), week_mode(mode))
}

fn hour_12(hour: u8) -> u8 {
    (hour + 11) % 12 + 1
}

fn meridiem(hour: u8) -> &'static str {
    if hour < 12 {
        "AM"
    } else {
        "PM"
    }
}

/// English ordinal suffix, with the 11th-13th exception.
fn ordinal_suffix(day: u8) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
