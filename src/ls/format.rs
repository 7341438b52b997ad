//! Rendering of a [`Report`] into output lines.
//!
//! Widths are always measured on the undecorated text so color escapes
//! never throw off column alignment.

use std::path::Path;

use chrono::NaiveDateTime;
use colored::Colorize;

use crate::config::FormatConfig;
use crate::vfs::{ArchiveEntry, ListedEntry};

use super::Report;

/// Dates older (or further in the future) than this show the year
const RECENT_DAYS: i64 = 180;

/// Width of a rendered date, e.g. `Jan  5 13:07` or `Jan  5  2019`
const DATE_WIDTH: usize = 12;

/// A rendered name and the number of visible characters it occupies
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    text: String,
    width: usize,
}

/// The virtual root has no name of its own
fn display_spec(spec: &str) -> &str {
    if spec.is_empty() { "." } else { spec }
}

/// One message per path specification that matched nothing.
pub fn error_lines(report: &Report<'_>, archive: &Path) -> Vec<String> {
    report
        .not_found
        .iter()
        .map(|err| format!("zipls: {err} in {}.", archive.display()))
        .collect()
}

/// Render the listings of a report, ls style.
///
/// Files come first as one group, then each directory. Directory groups are
/// separated by a blank line and headed by their path when anything was
/// printed before them or more than one directory is listed.
pub fn render(report: &Report<'_>, config: &FormatConfig) -> Vec<String> {
    let mut lines = Vec::new();
    let mut printed = !report.not_found.is_empty();

    if !report.files.is_empty() {
        lines.extend(format_group(&report.files, config));
        printed = true;
    }

    for group in &report.directories {
        if printed {
            lines.push(String::new());
        }
        if printed || report.directories.len() > 1 {
            lines.push(format!("{}:", display_spec(&group.spec)));
        }
        lines.extend(format_group(&group.entries, config));
        printed = true;
    }

    lines
}

/// Render one group in the configured format
pub fn format_group(entries: &[ListedEntry<'_>], config: &FormatConfig) -> Vec<String> {
    if config.long {
        format_long(entries, config)
    } else {
        let cells: Vec<Cell> = entries
            .iter()
            .map(|e| decorate(display_spec(&e.name), e.entry, config))
            .collect();
        format_columns(&cells, config.width)
    }
}

/// Apply color and the classify indicator to a name
fn decorate(name: &str, entry: &ArchiveEntry, config: &FormatConfig) -> Cell {
    let indicator = if !config.classify {
        ""
    } else if entry.is_dir {
        "/"
    } else if entry.is_executable() {
        "*"
    } else {
        ""
    };

    let colored_name = if !config.color {
        name.to_string()
    } else if entry.is_dir {
        name.blue().bold().to_string()
    } else if entry.is_executable() {
        name.red().to_string()
    } else {
        name.to_string()
    };

    Cell {
        text: format!("{colored_name}{indicator}"),
        width: name.chars().count() + indicator.len(),
    }
}

/// Lay out cells in columns like `ls`, filling each column top to bottom.
fn format_columns(cells: &[Cell], term_width: usize) -> Vec<String> {
    if cells.is_empty() {
        return Vec::new();
    }

    let longest = cells.iter().map(|c| c.width + 1).max().unwrap_or(1);
    let num_cols = (term_width / longest).max(1);
    let num_rows = cells.len().div_ceil(num_cols);
    let col_width = term_width / num_cols;

    (0..num_rows)
        .map(|row| {
            let mut line = String::new();
            for col in 0..num_cols {
                let Some(cell) = cells.get(col * num_rows + row) else {
                    break;
                };
                line.push_str(&cell.text);
                let has_next = col + 1 < num_cols && (col + 1) * num_rows + row < cells.len();
                if has_next {
                    line.push_str(&" ".repeat(col_width.saturating_sub(cell.width)));
                }
            }
            line
        })
        .collect()
}

/// One `ls -l` style line per entry
fn format_long(entries: &[ListedEntry<'_>], config: &FormatConfig) -> Vec<String> {
    let sizes: Vec<String> = entries
        .iter()
        .map(|e| format_size(e.entry.size, config.human_readable))
        .collect();
    let size_width = sizes.iter().map(|s| s.len()).max().unwrap_or(0);

    entries
        .iter()
        .zip(sizes)
        .map(|(e, size)| {
            let kind = if e.entry.is_dir { 'd' } else { '-' };
            let name = decorate(display_spec(&e.name), e.entry, config);
            format!(
                "{kind}{} {size:>size_width$} {} {}",
                permission_string(e.entry.permissions),
                format_date(e.entry.modified, config.now),
                name.text
            )
        })
        .collect()
}

fn format_size(size: u64, human_readable: bool) -> String {
    if human_readable {
        humansize::format_size(size, humansize::BINARY)
    } else {
        size.to_string()
    }
}

/// Render the low nine permission bits as `rwxr-xr-x`
fn permission_string(mode: u32) -> String {
    (0..9)
        .map(|i| {
            let bit = 0o400 >> i;
            if mode & bit == 0 {
                '-'
            } else {
                ['r', 'w', 'x'][i % 3]
            }
        })
        .collect()
}

/// `Mon dd HH:MM` for recent times, `Mon dd  YYYY` otherwise; blank when unknown
fn format_date(modified: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    match modified {
        None => " ".repeat(DATE_WIDTH),
        Some(dt) if (now - dt).num_days().abs() < RECENT_DAYS => {
            dt.format("%b %e %H:%M").to_string()
        }
        Some(dt) => dt.format("%b %e  %Y").to_string(),
    }
}
