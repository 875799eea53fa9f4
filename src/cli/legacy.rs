//! Older single-purpose lookups kept for existing scripts
use std::path::Path;

use crate::config::Config;
use crate::error::{Result, StampError};
use crate::models::Record;
use crate::query::{self, parse::TimeOfDay};

/// Print the date and time of the note at a single 1-based `index`
pub fn notetime(config_path: &Path, config: &mut Config, index: &str) -> Result<()> {
    let store = super::active_page(config_path, config)?;
    let records = store.scan()?;
    let position = query::select::checked_index(index, records.len())?;
    let record = &records[position - 1];
    println!("{} {}", record.date_text(), record.time_text());
    Ok(())
}

/// Print the text of the first note stamped at `time` (`HH:MM:SS` or `HH:MM`)
pub fn timenote(config_path: &Path, config: &mut Config, time: &str) -> Result<()> {
    let tod = query::parse_time(time)?;
    let store = super::active_page(config_path, config)?;
    let records = store.scan()?;
    let record = first_at(&records, tod).ok_or(StampError::TimestampNotFound)?;
    println!("{}", record.text);
    Ok(())
}

fn first_at(records: &[Record], tod: TimeOfDay) -> Option<&Record> {
    records.iter().find(|r| tod.matches(r.time))
}
