use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::config::{self, Config};
use crate::error::{Result, StampError};

const PLACEHOLDER: &str = " [...]";

/// Append a note to the active page
///
/// Text comes from `words`, else from piped stdin, else from a prompt.
pub fn append(config_path: &Path, config: &mut Config, words: &[String]) -> Result<()> {
    let text = if words.is_empty() {
        read_note()?
    } else {
        words.join(" ")
    };
    let text = text.trim();
    if text.is_empty() {
        return Err(StampError::EmptyNote);
    }

    let store = super::active_page(config_path, config)?;
    let record = store.append(text, config.clock)?;

    let width = config.limits.preview_chars;
    let page = config.page.as_deref().unwrap_or_default();
    println!(
        "stamp success: page {} timestamp {} {} note {}",
        shorten(page, width),
        record.date_text(),
        record.time_text(),
        shorten(&record.text, width)
    );
    Ok(())
}

fn read_note() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return config::prompt("note");
    }

    let mut text = String::new();
    stdin.lock().read_to_string(&mut text)?;
    Ok(text)
}

/// Collapse whitespace and cut at a word boundary to fit `width`
fn shorten(text: &str, width: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(PLACEHOLDER.len());
    let mut kept = String::new();
    for word in collapsed.split(' ') {
        let needed = kept.chars().count() + word.chars().count() + usize::from(!kept.is_empty());
        if needed > budget {
            break;
        }
        if !kept.is_empty() {
            kept.push(' ');
        }
        kept.push_str(word);
    }

    format!("{}{}", kept, PLACEHOLDER).trim_start().to_string()
}
