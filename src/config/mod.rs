//! Configuration module
//!
//! Handles loading and saving of the stamp config file (TOML) and resolves
//! the active notebook directory and page file, prompting when unset.

mod prompt;
mod types;

pub use prompt::prompt;
pub use types::{Config, Limits};

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StampError};
use crate::store::PAGE_EXT;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "STAMP_CONFIG";

/// Config path: explicit flag, then `$STAMP_CONFIG`, then `~/.timestampr/config.toml`
pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::home_dir()
        .map(|home| home.join(".timestampr").join("config.toml"))
        .ok_or_else(|| StampError::Config("cannot determine home directory".to_string()))
}

/// Load configuration; a missing file yields the defaults
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        StampError::Config(format!("Cannot read config from '{}': {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Location of a page file inside a notebook
pub fn page_path(notebook: &Path, page: &str) -> PathBuf {
    notebook.join(format!("{}.{}", page, PAGE_EXT))
}

/// Active notebook directory, prompting for one if unset or missing
pub fn ensure_notebook(config: &mut Config, config_path: &Path) -> Result<PathBuf> {
    if let Some(notebook) = config.notebook.as_ref().filter(|nb| nb.is_dir()) {
        return Ok(notebook.clone());
    }

    let answer = prompt("provide file-path to your notebook (folder)")?;
    set_notebook(config, config_path, &answer)
}

/// Active page file, prompting for a page name if unset or missing
pub fn ensure_page(config: &mut Config, config_path: &Path, notebook: &Path) -> Result<PathBuf> {
    if let Some(page) = config.page.as_deref() {
        let path = page_path(notebook, page);
        if path.is_file() {
            return Ok(path);
        }
        tracing::warn!(page, "active page file is missing");
    }

    let answer = prompt("name of new page")?;
    set_page(config, config_path, notebook, &answer)
}

/// Make `dir` the active notebook (creating it) and clear the active page
pub fn set_notebook(config: &mut Config, config_path: &Path, dir: &str) -> Result<PathBuf> {
    let dir = dir.trim();
    if dir.is_empty() {
        return Err(StampError::Config("no notebook folder given".to_string()));
    }

    let dir = expand_home(dir);
    fs::create_dir_all(&dir)?;
    let dir = dir.canonicalize()?;

    config.notebook = Some(dir.clone());
    config.page = None;
    save(config, config_path)?;

    tracing::debug!(notebook = %dir.display(), "active notebook changed");
    Ok(dir)
}

/// Make `name` the active page (creating an empty file); an empty name
/// becomes a timestamp
pub fn set_page(
    config: &mut Config,
    config_path: &Path,
    notebook: &Path,
    name: &str,
) -> Result<PathBuf> {
    let name = match name.trim() {
        "" => Local::now().format("%Y-%m-%d_%H%M%S").to_string(),
        trimmed => trimmed.to_string(),
    };

    let path = page_path(notebook, &name);
    if !path.exists() {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
    }

    config.page = Some(name);
    save(config, config_path)?;

    tracing::debug!(page = %path.display(), "active page changed");
    Ok(path)
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockFormat;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_is_default() {
        let temp = TempDir::new().unwrap();
        let loaded = load(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "clock = 12").unwrap();
        assert!(matches!(load(&path), Err(StampError::TomlParse(_))));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/config.toml");

        save(&Config::default(), &config_path).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        let mut config = Config::default();
        config.notebook = Some(temp.path().to_path_buf());
        config.page = Some("journal".to_string());
        config.clock = ClockFormat::H12;

        save(&config, &config_path).unwrap();
        assert_eq!(load(&config_path).unwrap(), config);
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        assert_eq!(resolve_path(Some(explicit.clone())).unwrap(), explicit);
    }

    #[test]
    fn test_set_notebook_creates_and_clears_page() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        let mut config = Config {
            page: Some("old".to_string()),
            ..Config::default()
        };

        let nb = temp.path().join("books/personal");
        let dir = set_notebook(&mut config, &config_path, nb.to_str().unwrap()).unwrap();

        assert!(dir.is_dir());
        assert_eq!(config.page, None);
        assert_eq!(load(&config_path).unwrap().notebook, Some(dir));
    }

    #[test]
    fn test_set_notebook_rejects_empty() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        assert!(set_notebook(&mut config, &temp.path().join("c.toml"), "  ").is_err());
    }

    #[test]
    fn test_set_page_touches_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        let mut config = Config::default();

        let path = set_page(&mut config, &config_path, temp.path(), " work ").unwrap();

        assert_eq!(path, temp.path().join("work.csv"));
        assert!(path.is_file());
        assert_eq!(config.page.as_deref(), Some("work"));
    }

    #[test]
    fn test_set_page_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("work.csv");
        fs::write(&existing, "1,2025-01-01,08:00:00,keep\n").unwrap();
        let mut config = Config::default();

        set_page(&mut config, &temp.path().join("c.toml"), temp.path(), "work").unwrap();

        assert_eq!(
            fs::read_to_string(existing).unwrap(),
            "1,2025-01-01,08:00:00,keep\n"
        );
    }

    #[test]
    fn test_set_page_empty_name_uses_timestamp() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();

        let path = set_page(&mut config, &temp.path().join("c.toml"), temp.path(), "").unwrap();

        let name = config.page.unwrap();
        assert_eq!(name.len(), "2025-01-01_120000".len());
        assert!(name.contains('_'));
        assert!(path.is_file());
    }

    #[test]
    fn test_ensure_existing_notebook_and_page() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("work.csv"), "").unwrap();
        let config_path = temp.path().join("config.toml");
        let mut config = Config {
            notebook: Some(temp.path().to_path_buf()),
            page: Some("work".to_string()),
            ..Config::default()
        };

        let nb = ensure_notebook(&mut config, &config_path).unwrap();
        let page = ensure_page(&mut config, &config_path, &nb).unwrap();

        assert_eq!(page, temp.path().join("work.csv"));
        // nothing needed persisting
        assert!(!config_path.exists());
    }
}
