/// A `/`-separated path inside an archive, relative to the virtual root.
///
/// Empty segments are dropped, so `a//b/`, `/a/b` and `a/b` all name the
/// same node. The virtual root is the path with no segments and renders as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchivePath {
    segments: Vec<String>,
}

impl ArchivePath {
    /// The virtual root
    pub fn root() -> Self {
        ArchivePath::default()
    }

    /// Parse a path string into an ArchivePath
    pub fn parse(path: &str) -> Self {
        let segments = split(path).map(String::from).collect();
        ArchivePath { segments }
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Check if this path is the virtual root
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the parent path and the leaf name.
    ///
    /// Returns `None` for the root, which has no parent.
    pub fn split_leaf(&self) -> Option<(ArchivePath, &str)> {
        let (leaf, parent) = self.segments.split_last()?;
        Some((
            ArchivePath {
                segments: parent.to_vec(),
            },
            leaf.as_str(),
        ))
    }

    /// Get the last segment (leaf name)
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(|s| s.as_str())
    }

    /// Append one segment
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        if !name.is_empty() {
            segments.push(name.to_string());
        }
        ArchivePath { segments }
    }
}

impl std::fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Iterate the non-empty segments of a `/`-separated path.
pub fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Normalize a user-supplied path specification.
///
/// Leading and trailing slashes are dropped; the root is the empty string.
pub fn normalize_spec(spec: &str) -> String {
    spec.trim_matches('/').to_string()
}
