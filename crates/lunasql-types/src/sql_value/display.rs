//! Display implementation for SqlValue

use std::fmt;

use crate::sql_value::SqlValue;

/// How values are rendered to users (result sets, error messages).
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Boolean(true) => write!(f, "TRUE"),
            SqlValue::Boolean(false) => write!(f, "FALSE"),
            SqlValue::Smallint(n) => write!(f, "{}", n),
            SqlValue::Integer(n) => write!(f, "{}", n),
            SqlValue::Bigint(n) => write!(f, "{}", n),
            SqlValue::Numeric(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    // Whole numbers print without a decimal point
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            SqlValue::Double(n) => write!(f, "{}", n),
            SqlValue::Character(s) => write!(f, "{}", s),
            SqlValue::Varchar(s) => write!(f, "{}", s),
            SqlValue::Date(d) => write!(f, "{}", d),
            SqlValue::Time(t) => write!(f, "{}", t),
            SqlValue::Timestamp(ts) => write!(f, "{}", ts),
        }
    }
}
