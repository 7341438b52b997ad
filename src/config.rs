use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use crate::vfs::FilterOptions;

/// Width used when neither `COLUMNS` nor the terminal report one
pub const DEFAULT_WIDTH: usize = 80;

/// Everything one invocation needs, gathered once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub archive: PathBuf,
    /// Path specifications to list; empty means the virtual root
    pub paths: Vec<String>,
    pub hide_macosx: bool,
    pub filter: FilterOptions,
    pub format: FormatConfig,
}

/// How listings are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Output width in columns for the short format grid
    pub width: usize,
    pub long: bool,
    pub classify: bool,
    pub color: bool,
    pub human_readable: bool,
    /// Reference time deciding between the recent and old date layouts
    pub now: NaiveDateTime,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            long: false,
            classify: false,
            color: false,
            human_readable: false,
            now: Local::now().naive_local(),
        }
    }
}

/// Output width: `COLUMNS` when set to a positive number, else the
/// terminal's width, else [`DEFAULT_WIDTH`].
pub fn detect_width() -> usize {
    width_from(
        std::env::var("COLUMNS").ok().as_deref(),
        terminal_size::terminal_size().map(|(w, _)| w.0 as usize),
    )
}

fn width_from(columns: Option<&str>, terminal: Option<usize>) -> usize {
    columns
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
        .or(terminal.filter(|w| *w > 0))
        .unwrap_or(DEFAULT_WIDTH)
}
