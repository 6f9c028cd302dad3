//! Date and time function implementations
//!
//! # Module Organization
//!
//! - `extract` - field extraction (YEAR, MONTH, DAYOFWEEK, WEEKDAY, ...)
//! - `week` - week numbering (WEEK, YEARWEEK, WEEKOFYEAR) and the
//!   mode-driven week calculator behind them
//! - `format` - strftime-style DATE_FORMAT
//! - `current` - clock functions (CURRENT_DATE, CURRENT_TIME, NOW)

mod current;
mod extract;
mod format;
mod week;

pub(super) use current::{current_date, current_time, current_timestamp};
pub(super) use extract::{
    date, day, day_name, day_of_week, day_of_year, hour, microsecond, minute, month, month_name,
    second, time_to_sec, weekday, year,
};
pub(super) use format::date_format;
pub(super) use week::{week, week_of_year, yearweek};

// Calendar primitives reusable by the host engine
pub use format::format_date;
pub use week::{calc_week, week_mode, WeekBehaviour};
