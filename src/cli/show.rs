use std::path::Path;

use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::query;

/// Show records by position: foot/head/all/first/last or `<n> [to <m>]`
pub fn run(config_path: &Path, config: &mut Config, args: &[String]) -> Result<()> {
    let store = super::active_page(config_path, config)?;
    let selection = query::select(&args.join(" "), store.scan()?, &config.limits)?;

    for record in &selection.records {
        display::print_record(record);
    }

    if selection.truncated {
        println!(
            "... showing {} of {} notes",
            selection.records.len(),
            selection.total
        );
    }

    Ok(())
}
