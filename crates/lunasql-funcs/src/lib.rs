//! Scalar date/time function catalog
//!
//! This crate implements the date/time slice of LunaSQL's scalar function
//! library: field extraction (YEAR, MONTH, DAYOFWEEK, ...), MySQL-compatible
//! week numbering (WEEK, YEARWEEK with modes 0-7), and strftime-style
//! formatting (DATE_FORMAT).
//!
//! All functions are pure: they take argument values, return a value or an
//! error, and keep no state between calls. The host engine's row evaluator
//! dispatches to [`eval_scalar_function`] by function name.

pub mod coercion;
pub mod errors;
mod functions;

pub use errors::FunctionError;
pub use functions::datetime::{calc_week, format_date, week_mode, WeekBehaviour};
pub use functions::eval_scalar_function;
