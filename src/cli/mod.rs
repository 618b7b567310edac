use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::ScanError;
use crate::rank::DEFAULT_TOP;
use crate::scan::SelectionMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan. When omitted, the path (and mode, unless given)
    /// are read interactively from the console.
    pub path: Option<PathBuf>,

    /// Which objects to report. [default: both]
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// How many of the largest objects to show.
    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top: usize,
}

/// Command-line counterpart of [`SelectionMode`].
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Report files only.
    Files,
    /// Report directories only.
    Dirs,
    /// Report both files and directories.
    Both,
}

impl From<Mode> for SelectionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Files => SelectionMode::FilesOnly,
            Mode::Dirs => SelectionMode::DirectoriesOnly,
            Mode::Both => SelectionMode::Both,
        }
    }
}

/// Parses command-line arguments using `clap` and returns them.
///
/// This is the entry point for the CLI logic; parse failures print help and
/// exit through clap itself.
pub fn run() -> Result<Args, Box<dyn std::error::Error>> {
    Ok(Args::parse())
}

/// Read the root path from the console (first prompt of the interactive
/// flow). The path is taken verbatim apart from the trailing newline; no
/// existence check happens here.
pub fn prompt_path() -> Result<PathBuf, ScanError> {
    let line = prompt_line("Enter the path to scan (e.g., /var/log or C:\\Program Files): ")?;
    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

/// Read the selection mode, re-prompting until one of `F`, `D`, `B` is
/// entered. Anything else is rejected with a message rather than silently
/// recording nothing.
pub fn prompt_mode() -> Result<SelectionMode, ScanError> {
    loop {
        let line = prompt_line("Enter the objects to scan\nF - files only\nD - directories only\nB - both\n")?;
        match line.trim() {
            "F" => return Ok(SelectionMode::FilesOnly),
            "D" => return Ok(SelectionMode::DirectoriesOnly),
            "B" => return Ok(SelectionMode::Both),
            other => eprintln!("Unrecognized mode '{}', expected F, D or B.", other),
        }
    }
}

/// Block until the user presses Enter. Used only at the end of the
/// interactive flow so the window does not close under the output.
pub fn pause_for_enter() -> Result<(), ScanError> {
    println!("Press Enter to quit");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String, ScanError> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(ScanError::Input(
            "console input ended before a value was entered".to_string(),
        ));
    }
    Ok(line)
}
