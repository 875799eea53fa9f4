//! Command-line interface module
//!
//! One file per command. Every command receives the loaded configuration
//! explicitly and persists it only when it changes the active notebook,
//! page or clock:
//! - note: append via `stamp - <text>`
//! - show, times, search, clock: read or rewrite the active page
//! - legacy: notetime / timenote
//! - page: active, page, notebook

pub mod clock;
pub mod legacy;
pub mod note;
pub mod page;
pub mod search;
pub mod show;
pub mod times;

use std::path::Path;

use crate::config::{self, Config};
use crate::error::Result;
use crate::store::PageStore;

/// Store for the active page, resolving notebook and page first
fn active_page(config_path: &Path, config: &mut Config) -> Result<PageStore> {
    let notebook = config::ensure_notebook(config, config_path)?;
    let page = config::ensure_page(config, config_path, &notebook)?;
    Ok(PageStore::open(page))
}
