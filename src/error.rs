use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the archive readers and the listing engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The archive container is missing, unreadable or malformed. Fatal for the invocation.
    #[error("cannot read archive {}: {source}", path.display())]
    ArchiveUnreadable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The file extension names a compressed single file, not an archive with members.
    #[error("{}: not a listable archive (compressed file without a member list)", path.display())]
    UnsupportedArchive { path: PathBuf },

    /// A path specification matched nothing in the archive tree.
    #[error("{0}: No such file or directory")]
    NotFound(String),
}

impl Error {
    pub fn unreadable(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::ArchiveUnreadable {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
