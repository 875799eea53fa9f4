//! Colour decision from environment and TTY status

use std::env;
use std::io::IsTerminal;

/// Colour-related environment settings
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct ColorEnv {
    no_color: bool,
    clicolor_force: Option<String>,
    clicolor: Option<String>,
}

impl ColorEnv {
    fn from_env() -> Self {
        Self {
            no_color: env::var_os("NO_COLOR").is_some(),
            clicolor_force: env::var("CLICOLOR_FORCE").ok(),
            clicolor: env::var("CLICOLOR").ok(),
        }
    }

    /// NO_COLOR wins, then CLICOLOR_FORCE, then CLICOLOR=0, then the TTY check
    fn wants_color(&self, is_tty: bool) -> bool {
        if self.no_color {
            return false;
        }
        if self.clicolor_force.as_deref().is_some_and(|v| v != "0") {
            return true;
        }
        if self.clicolor.as_deref() == Some("0") {
            return false;
        }
        is_tty
    }
}

/// Whether stdout output should be styled
pub fn should_use_colors() -> bool {
    ColorEnv::from_env().wants_color(std::io::stdout().is_terminal())
}
