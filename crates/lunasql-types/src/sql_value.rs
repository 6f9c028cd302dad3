//! SQL value representation
//!
//! A closed set of tagged variants covering every scalar type the function
//! catalog can receive from row evaluation. Conversion between variants is
//! the job of the functions crate; this type only carries the data.

mod display;

use crate::temporal::{Date, Time, Timestamp};

/// A dynamically-typed SQL scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Boolean(bool),
    Smallint(i16),
    Integer(i64),
    Bigint(i64),
    Numeric(f64),
    Double(f64),
    Character(String),
    Varchar(String),
    Date(Date),
    Time(Time),
    Timestamp(Timestamp),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Returns the integer content of this value, if it has one.
    ///
    /// Floating variants truncate toward zero, matching SQL integer cast
    /// semantics for function arguments such as week modes.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SqlValue::Smallint(n) => Some(i64::from(*n)),
            SqlValue::Integer(n) | SqlValue::Bigint(n) => Some(*n),
            SqlValue::Numeric(n) | SqlValue::Double(n) => Some(*n as i64),
            _ => None,
        }
    }
}
