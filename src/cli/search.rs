use std::path::Path;

use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::models::Record;

/// Print notes whose text contains `term`, ignoring case
pub fn run(config_path: &Path, config: &mut Config, args: &[String]) -> Result<()> {
    let store = super::active_page(config_path, config)?;
    for record in search_notes(store.scan()?, &args.join(" ")) {
        display::print_record(&record);
    }
    Ok(())
}

/// Case-insensitive substring match over the text field only
pub fn search_notes(records: Vec<Record>, term: &str) -> Vec<Record> {
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.text.to_lowercase().contains(&needle))
        .collect()
}
