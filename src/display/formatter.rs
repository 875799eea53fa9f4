//! Record lines for the terminal

use termimad::crossterm::style::Stylize;

use crate::display::terminal::should_use_colors;
use crate::models::Record;

/// `<index>  <date> <time>  <text>`, index and timestamp styled when `color` is set
pub fn render_record(record: &Record, color: bool) -> String {
    if !color {
        return record.to_string();
    }

    let stamp = format!("{} {}", record.date_text(), record.time_text());
    format!(
        "{}  {}  {}",
        record.index.to_string().dark_grey(),
        stamp.cyan(),
        record.text
    )
}

pub fn print_record(record: &Record) {
    println!("{}", render_record(record, should_use_colors()));
}

/// Record prefixed with a label such as `BEFORE`
pub fn print_labeled(label: &str, record: &Record) {
    let color = should_use_colors();
    let label = format!("{}:", label);
    if color {
        println!("{} {}", label.bold(), render_record(record, true));
    } else {
        println!("{} {}", label, render_record(record, false));
    }
}
