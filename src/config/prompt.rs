use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Ask a question on stdout and read one trimmed line from stdin
pub fn prompt(message: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}\n> ", message)?;
    stdout.flush()?;

    read_answer(&mut io::stdin().lock())
}

fn read_answer(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
