use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::ClockFormat;

/// Stamp configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Active notebook directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook: Option<PathBuf>,

    /// Active page name (file stem inside the notebook)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,

    /// Time format used for new notes
    pub clock: ClockFormat,

    /// Output limits
    pub limits: Limits,
}

/// Row counts and preview widths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Rows shown by `show foot` (and bare `show`)
    pub foot: usize,

    /// Rows shown by `show head`
    pub head: usize,

    /// Cap on rows shown by `show all`
    pub all: usize,

    /// Characters of page name and note echoed after an append
    pub preview_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            foot: 10,
            head: 10,
            all: 100,
            preview_chars: 50,
        }
    }
}
