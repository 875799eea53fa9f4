//! Data models module
//!
//! Defines the page row model: Record and the ClockFormat of its time field.

pub mod record;

pub use record::{ClockFormat, Record};
