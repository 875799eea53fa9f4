use chrono::Local;
use std::path::Path;

use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::query::{self, Resolution};

/// Show records by time/date: a point, a whole day, or a range
pub fn run(config_path: &Path, config: &mut Config, args: &[String]) -> Result<()> {
    let query = query::parse_query(&args.join(" "))?;
    let store = super::active_page(config_path, config)?;
    let records = store.scan()?;

    match query::resolve(&query, &records, Local::now().date_naive()) {
        Resolution::Matches(matches) => {
            for record in &matches {
                display::print_record(record);
            }
        }
        Resolution::Nearest { before, after } => {
            if let Some(record) = &before {
                display::print_labeled("BEFORE", record);
            }
            if let Some(record) = &after {
                display::print_labeled("AFTER", record);
            }
        }
    }

    Ok(())
}
