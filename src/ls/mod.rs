//! Multi-path `ls` semantics over an archive tree.
//!
//! Every path specification is expanded, filtered and sorted into one
//! [`Report`] before anything is printed, so a missing path never
//! suppresses the listings of the others.

pub mod format;
pub mod output;

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::vfs::{self, FilterOptions, ListedEntry, Listing, Node};

/// The contents of one listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryGroup<'a> {
    /// Concrete path the group was produced from
    pub spec: String,
    pub entries: Vec<ListedEntry<'a>>,
}

/// Everything one invocation will print
#[derive(Debug, Default)]
pub struct Report<'a> {
    /// Path specifications that matched nothing, in request order
    pub not_found: Vec<Error>,
    /// Files, and directories listed as themselves, sorted by name
    pub files: Vec<ListedEntry<'a>>,
    /// Directory listings sorted by path, each sorted by name
    pub directories: Vec<DirectoryGroup<'a>>,
}

/// List every path specification against the tree.
///
/// An empty `specs` lists the virtual root.
pub fn list<'a, S: AsRef<str>>(specs: &[S], root: &'a Node, options: FilterOptions) -> Report<'a> {
    let concrete = if specs.is_empty() {
        vfs::expand(&[""], root)
    } else {
        vfs::expand(specs, root)
    };

    let mut report = Report::default();
    for spec in concrete {
        match vfs::filter(&spec, root, options) {
            Ok(Listing::Single(entry)) => report.files.push(entry),
            Ok(Listing::Contents(mut entries)) => {
                entries.sort_by(|a, b| a.name.cmp(&b.name));
                report.directories.push(DirectoryGroup { spec, entries });
            }
            Err(err) => {
                debug!(spec = %spec, "path not found");
                report.not_found.push(err);
            }
        }
    }

    report.files.sort_by(|a, b| a.name.cmp(&b.name));
    report.directories.sort_by(|a, b| a.spec.cmp(&b.spec));
    report
}

/// Read the archive named by `config` and build its tree.
pub fn load_tree(config: &Config) -> crate::error::Result<Node> {
    let entries = crate::archive::read_entries(&config.archive)?;
    Ok(vfs::build(entries, config.hide_macosx))
}

/// Print the report: missing paths to stderr, listings to stdout.
pub fn print_report(report: &Report<'_>, config: &Config) -> Result<()> {
    for line in format::error_lines(report, &config.archive) {
        crate::eprint_line!("{line}");
    }
    for line in format::render(report, &config.format) {
        crate::print_line!("{line}");
    }
    Ok(())
}
