//! Normalization of arbitrary scalar values to a datetime instant
//!
//! Every date-part function funnels its argument through [`datetime_value`]
//! before projecting a field. The contract is deliberately lenient: NULL
//! propagates as NULL, and any non-null value that cannot be interpreted as
//! a datetime degrades to the zero instant 0000-01-01 00:00:00 instead of
//! raising an error. Callers therefore get epoch-zero fields from malformed
//! input, never a failure. This matches the observed behavior of the engine
//! this library is compatible with; do not "fix" it to return errors.

use lunasql_types::{Date, SqlValue, Time, Timestamp};

/// Normalize a scalar value to an instant.
///
/// Returns `None` only for SQL NULL. All other values produce an instant:
/// native temporal values pass through, text is parsed as a datetime and
/// then as a date, the integer and floating families are interpreted as
/// packed `YYYYMMDD` / `YYYYMMDDHHMMSS` digits, and anything that resists
/// interpretation becomes [`Timestamp::zero`].
pub fn datetime_value(value: &SqlValue) -> Option<Timestamp> {
    match value {
        SqlValue::Null => None,
        SqlValue::Timestamp(ts) => Some(*ts),
        SqlValue::Date(d) => Some(Timestamp::new(*d, Time::midnight())),
        SqlValue::Varchar(s) | SqlValue::Character(s) => {
            Some(parse_datetime_text(s).unwrap_or_else(Timestamp::zero))
        }
        SqlValue::Smallint(n) => Some(packed_int(i64::from(*n))),
        SqlValue::Integer(n) | SqlValue::Bigint(n) => Some(packed_int(*n)),
        SqlValue::Numeric(n) | SqlValue::Double(n) => Some(packed_int(*n as i64)),
        // TIME and BOOLEAN carry no calendar date
        SqlValue::Time(_) | SqlValue::Boolean(_) => Some(Timestamp::zero()),
    }
}

fn parse_datetime_text(s: &str) -> Option<Timestamp> {
    if let Ok(ts) = s.parse::<Timestamp>() {
        return Some(ts);
    }
    // Digit-only strings get the same packed treatment as integers
    parse_packed_digits(s.trim())
}

fn packed_int(n: i64) -> Timestamp {
    if n < 0 {
        return Timestamp::zero();
    }
    parse_packed_digits(&n.to_string()).unwrap_or_else(Timestamp::zero)
}

/// Interpret a run of decimal digits as a packed datetime:
/// 8 digits are YYYYMMDD, 14 digits are YYYYMMDDHHMMSS.
fn parse_packed_digits(digits: &str) -> Option<Timestamp> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let field = |range: std::ops::Range<usize>| -> Option<u32> {
        digits.get(range)?.parse::<u32>().ok()
    };

    match digits.len() {
        8 => {
            let date =
                Date::new(field(0..4)? as i32, field(4..6)? as u8, field(6..8)? as u8).ok()?;
            Some(Timestamp::new(date, Time::midnight()))
        }
        14 => {
            let date =
                Date::new(field(0..4)? as i32, field(4..6)? as u8, field(6..8)? as u8).ok()?;
            let time =
                Time::new(field(8..10)? as u8, field(10..12)? as u8, field(12..14)? as u8, 0)
                    .ok()?;
            Some(Timestamp::new(date, time))
        }
        _ => None,
    }
}
