//! Terminal display module
//!
//! Prints records, styled only when stdout is a TTY.

mod formatter;
mod terminal;

pub use formatter::{print_labeled, print_record};
