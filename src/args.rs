use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;

/// Summarise a sales file and write a report on selected products.
///
/// Anything not given on the command line is asked for on stdin.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// sales file, one `name, MM/dd/yyyy, amount` per line
    pub input: Option<PathBuf>,
    /// where the filtered report is written, replacing any existing file
    pub output: Option<PathBuf>,
    /// product names to report on, separated by commas
    #[arg(short, long, value_name = "TERMS")]
    pub search: Option<String>,
}

/// Prints `question` and reads one line from `input`, without its line ending.
/// `None` once `input` is exhausted.
pub fn prompt(input: &mut impl BufRead, question: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", question)?;
    stdout.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(|c: char| c == '\r' || c == '\n').len();
    line.truncate(len);
    Ok(Some(line))
}

/// Splits raw search text on every comma, entries kept untrimmed. Blank text
/// means no search at all.
pub fn split_search(raw: &str) -> Option<Vec<String>> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw.split(',').map(str::to_owned).collect())
}
