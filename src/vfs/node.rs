use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use super::path::{self, ArchivePath};

/// Top-level folder added by the macOS Finder "Compress" action
pub const MACOSX_PREFIX: &str = "__MACOSX/";

/// One record from an archive's flat member list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path inside the archive, as stored by the container
    pub path: String,
    pub is_dir: bool,
    /// Uncompressed size in bytes; meaningless for directories
    pub size: u64,
    /// Modification time as recorded in the archive, `None` when unknown
    pub modified: Option<NaiveDateTime>,
    /// Unix permission bits, 0 when the archive did not record any
    pub permissions: u32,
}

impl ArchiveEntry {
    pub fn file(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            size,
            modified: None,
            permissions: 0,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            size: 0,
            modified: None,
            permissions: 0,
        }
    }

    pub fn with_modified(mut self, modified: NaiveDateTime) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn with_permissions(mut self, permissions: u32) -> Self {
        self.permissions = permissions;
        self
    }

    /// Placeholder for a directory the archive never listed explicitly
    fn synthesized(path: &ArchivePath) -> Self {
        Self::directory(path.to_string())
    }

    /// Whether the owner-execute bit is set
    pub fn is_executable(&self) -> bool {
        !self.is_dir && self.permissions & 0o100 != 0
    }

    /// Take over another entry's metadata while keeping this entry's kind
    fn overwrite_metadata(&mut self, other: ArchiveEntry) {
        let is_dir = self.is_dir;
        *self = other;
        self.is_dir = is_dir;
    }
}

/// A position in the virtual directory tree.
///
/// Directories always own a (possibly empty) children map and files never
/// do, so "empty directory" and "file" cannot be confused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory {
        entry: ArchiveEntry,
        children: BTreeMap<String, Node>,
    },
    File {
        entry: ArchiveEntry,
    },
}

impl Node {
    fn empty_dir(entry: ArchiveEntry) -> Self {
        Node::Directory {
            entry,
            children: BTreeMap::new(),
        }
    }

    pub fn entry(&self) -> &ArchiveEntry {
        match self {
            Node::Directory { entry, .. } | Node::File { entry } => entry,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Children of a directory, `None` for files
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Directory { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// Exact lookup of a path below this node
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        path::split(path).try_fold(self, |node, segment| node.children()?.get(segment))
    }

    /// Walk to `path`, creating placeholder directories for every missing
    /// segment, shallowest first. Returns the children map of the directory
    /// at `path`, or `None` if some segment along the way is already a file.
    fn ensure_dir(&mut self, path: &ArchivePath) -> Option<&mut BTreeMap<String, Node>> {
        let mut current = ArchivePath::root();
        let mut node = self;
        for segment in path.segments() {
            current = current.child(segment);
            node = match node {
                Node::Directory { children, .. } => {
                    children.entry(segment.clone()).or_insert_with(|| {
                        debug!(path = %current, "synthesizing missing ancestor directory");
                        Node::empty_dir(ArchiveEntry::synthesized(&current))
                    })
                }
                Node::File { .. } => return None,
            };
        }
        match node {
            Node::Directory { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// Insert or update the node for one archive entry.
    fn insert(&mut self, entry: ArchiveEntry) {
        let path = ArchivePath::parse(&entry.path);
        let Some((parent, leaf)) = path.split_leaf() else {
            debug!(path = %entry.path, "skipping entry naming the archive root");
            return;
        };

        let Some(siblings) = self.ensure_dir(&parent) else {
            warn!(path = %entry.path, parent = %parent, "skipping entry nested under a file");
            return;
        };

        let entry = ArchiveEntry {
            path: path.to_string(),
            ..entry
        };
        match siblings.get_mut(leaf) {
            None => {
                let node = if entry.is_dir {
                    Node::empty_dir(entry)
                } else {
                    Node::File { entry }
                };
                siblings.insert(leaf.to_string(), node);
            }
            // Placeholder (or earlier explicit entry) gets the real metadata
            Some(Node::Directory { entry: existing, .. }) if entry.is_dir => {
                *existing = entry;
            }
            Some(existing) => {
                warn!(
                    path = %entry.path,
                    "duplicate archive path, later entry overwrites metadata"
                );
                match existing {
                    Node::Directory { entry: e, .. } | Node::File { entry: e } => {
                        e.overwrite_metadata(entry)
                    }
                }
            }
        }
    }
}

/// Reconstruct the virtual tree from the flat entry list, in archive order.
///
/// Missing ancestors are synthesized as placeholder directories. When
/// `hide_macosx` is set every entry under `__MACOSX/` is dropped.
pub fn build<I>(entries: I, hide_macosx: bool) -> Node
where
    I: IntoIterator<Item = ArchiveEntry>,
{
    let mut root = Node::empty_dir(ArchiveEntry::synthesized(&ArchivePath::root()));
    let mut count = 0usize;
    for entry in entries {
        if hide_macosx && entry.path.starts_with(MACOSX_PREFIX) {
            continue;
        }
        root.insert(entry);
        count += 1;
    }
    debug!(entries = count, "built archive tree");
    root
}
