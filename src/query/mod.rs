//! Query module
//!
//! Turns `show` and `times` arguments into record selections:
//! - parse: flexible time/date text into TimeQuery / RangeQuery
//! - resolve: time/date matching with BEFORE/AFTER fallback
//! - select: positional keywords and index ranges

pub mod parse;
pub mod resolve;
pub mod select;

pub use parse::{parse_query, parse_time};
pub use resolve::{resolve, Resolution};
pub use select::select;
