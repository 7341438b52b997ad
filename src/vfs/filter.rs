use crate::error::{Error, Result};

use super::node::{ArchiveEntry, Node};

/// Switches that change what a listing includes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Include names starting with `.`
    pub show_hidden: bool,
    /// List directories themselves instead of their contents
    pub dirs_as_entries: bool,
}

/// One displayed name paired with the entry it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry<'a> {
    pub name: String,
    pub entry: &'a ArchiveEntry,
}

/// What listing one concrete path produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// A file, or a directory listed as itself
    Single(ListedEntry<'a>),
    /// The visible children of a directory; may be empty
    Contents(Vec<ListedEntry<'a>>),
}

impl<'a> Listing<'a> {
    /// Flatten into the ordered (name, entry) sequence
    pub fn into_entries(self) -> Vec<ListedEntry<'a>> {
        match self {
            Listing::Single(entry) => vec![entry],
            Listing::Contents(entries) => entries,
        }
    }
}

/// Determine what `ls` shows for one concrete path.
///
/// A missing path fails with [`Error::NotFound`]; an existing directory with
/// no visible children is an empty [`Listing::Contents`], never an error.
pub fn filter<'a>(spec: &str, root: &'a Node, options: FilterOptions) -> Result<Listing<'a>> {
    let node = root
        .lookup(spec)
        .ok_or_else(|| Error::NotFound(spec.to_string()))?;

    match node.children() {
        Some(children) if !options.dirs_as_entries => Ok(Listing::Contents(
            children
                .iter()
                .filter(|(name, _)| options.show_hidden || !name.starts_with('.'))
                .map(|(name, child)| ListedEntry {
                    name: name.clone(),
                    entry: child.entry(),
                })
                .collect(),
        )),
        _ => Ok(Listing::Single(ListedEntry {
            name: spec.to_string(),
            entry: node.entry(),
        })),
    }
}
