pub mod tar;
pub mod zip;

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::vfs::ArchiveEntry;

/// Container formats we can enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveType {
    Tar,
    TarGz,
    TarBz2,
    Zip,
}

impl ArchiveType {
    /// Detect archive type from file extension.
    ///
    /// Anything not recognized as tar is opened as zip, which also covers
    /// zip-based formats such as `.jar` or `.apk`. Plain `.gz`/`.bz2` files
    /// have no member list and are rejected.
    pub fn from_path(path: &Path) -> Result<Self> {
        let path_lower = path.to_string_lossy().to_lowercase();
        if path_lower.ends_with(".tar.gz") || path_lower.ends_with(".tgz") {
            return Ok(ArchiveType::TarGz);
        }
        if path_lower.ends_with(".tar.bz2")
            || path_lower.ends_with(".tbz2")
            || path_lower.ends_with(".tbz")
        {
            return Ok(ArchiveType::TarBz2);
        }
        if path_lower.ends_with(".tar") {
            return Ok(ArchiveType::Tar);
        }
        if path_lower.ends_with(".gz") || path_lower.ends_with(".bz2") {
            return Err(Error::UnsupportedArchive {
                path: path.to_path_buf(),
            });
        }
        Ok(ArchiveType::Zip)
    }
}

/// Trait for enumerating the flat member list of an archive container
pub trait ArchiveHandler {
    /// Read every entry, in container order
    fn read_entries(&self, path: &Path) -> Result<Vec<ArchiveEntry>>;
}

/// Open the archive at `path` and enumerate all of its entries.
pub fn read_entries(path: &Path) -> Result<Vec<ArchiveEntry>> {
    let archive_type = ArchiveType::from_path(path)?;
    debug!(path = %path.display(), ?archive_type, "opening archive");

    let entries = match archive_type {
        ArchiveType::Zip => zip::ZipHandler::new().read_entries(path)?,
        ArchiveType::Tar | ArchiveType::TarGz | ArchiveType::TarBz2 => {
            tar::TarHandler::new(archive_type).read_entries(path)?
        }
    };

    debug!(entries = entries.len(), "read archive entries");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_tar_variants() {
        assert_eq!(ArchiveType::from_path(Path::new("a.tar")).unwrap(), ArchiveType::Tar);
        assert_eq!(ArchiveType::from_path(Path::new("a.TGZ")).unwrap(), ArchiveType::TarGz);
        assert_eq!(
            ArchiveType::from_path(Path::new("a.tar.gz")).unwrap(),
            ArchiveType::TarGz
        );
        assert_eq!(
            ArchiveType::from_path(Path::new("a.tar.bz2")).unwrap(),
            ArchiveType::TarBz2
        );
    }

    #[test]
    fn test_defaults_to_zip() {
        assert_eq!(ArchiveType::from_path(Path::new("a.zip")).unwrap(), ArchiveType::Zip);
        assert_eq!(ArchiveType::from_path(Path::new("lib.jar")).unwrap(), ArchiveType::Zip);
        assert_eq!(ArchiveType::from_path(Path::new("noext")).unwrap(), ArchiveType::Zip);
    }

    #[test]
    fn test_rejects_single_file_compression() {
        assert!(matches!(
            ArchiveType::from_path(Path::new("notes.txt.gz")),
            Err(Error::UnsupportedArchive { .. })
        ));
    }
}
