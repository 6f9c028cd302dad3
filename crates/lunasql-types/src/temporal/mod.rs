//! Temporal types
//!
//! Calendar date, wall-clock time, and their combination. The combined
//! `Timestamp` is the canonical instant the date/time function catalog
//! operates on.

mod date;
mod time;
mod timestamp;

pub use date::Date;
pub use time::Time;
pub use timestamp::Timestamp;
