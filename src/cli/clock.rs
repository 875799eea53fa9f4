use std::path::Path;

use crate::config::{self, Config};
use crate::error::Result;
use crate::models::ClockFormat;

/// Rewrite the active page's times as 12h or 24h and use that format from now on
pub fn run(config_path: &Path, config: &mut Config, format: &str) -> Result<()> {
    let clock: ClockFormat = format.parse()?;
    let store = super::active_page(config_path, config)?;

    let count = store.rewrite_all(|mut record| {
        record.clock = clock;
        record
    })?;

    config.clock = clock;
    config::save(config, config_path)?;

    println!("stamp success: {} notes now use {} time", count, clock);
    Ok(())
}
