use std::path::Path;

use crate::config::{self, Config};
use crate::error::Result;
use crate::store;

/// Print the active notebook and page
pub fn active(config: &Config) -> Result<()> {
    let notebook = config
        .notebook
        .as_ref()
        .map(|nb| nb.display().to_string())
        .unwrap_or_else(|| "<unset>".to_string());
    let page = config.page.as_deref().unwrap_or("<unset>");

    println!("Active notebook: {}\nActive page: {}", notebook, page);
    Ok(())
}

/// Switch to (or create) a page in the active notebook
pub fn page(config_path: &Path, config: &mut Config, name: Option<String>) -> Result<()> {
    let notebook = config::ensure_notebook(config, config_path)?;

    let name = match name {
        Some(name) => name,
        None => {
            let pages = store::list_pages(&notebook);
            if pages.is_empty() {
                println!("(no pages yet)");
            } else {
                println!("Existing pages:");
                for (i, page) in pages.iter().enumerate() {
                    println!("[{}] {}", i + 1, page);
                }
            }
            config::prompt("name of new page")?
        }
    };

    config::set_page(config, config_path, &notebook, &name)?;
    println!(
        "Page changed to {}",
        config.page.as_deref().unwrap_or_default()
    );
    Ok(())
}

/// Switch to (or create) a notebook directory
pub fn notebook(config_path: &Path, config: &mut Config, path: Option<String>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => config::prompt("provide file-path to your notebook (folder)")?,
    };

    let dir = config::set_notebook(config, config_path, &path)?;
    println!("Notebook changed to {}", dir.display());
    Ok(())
}
