//! LunaSQL Type System
//!
//! This crate provides the value model consumed by the scalar function
//! library:
//! - SQL value representation (`SqlValue`)
//! - Temporal types (DATE, TIME, TIMESTAMP)

mod sql_value;
mod temporal;

pub use sql_value::SqlValue;
pub use temporal::{Date, Time, Timestamp};
