use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bzip2::read::BzDecoder;
use chrono::{DateTime, Local, NaiveDateTime};
use flate2::read::GzDecoder;

use crate::error::{Error, Result};
use crate::vfs::ArchiveEntry;

use super::{ArchiveHandler, ArchiveType};

pub struct TarHandler {
    archive_type: ArchiveType,
}

impl TarHandler {
    pub fn new(archive_type: ArchiveType) -> Self {
        TarHandler { archive_type }
    }
}

impl ArchiveHandler for TarHandler {
    fn read_entries(&self, path: &Path) -> Result<Vec<ArchiveEntry>> {
        let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
        let reader = BufReader::new(file);

        // Compressed tars are not seekable, so the whole stream is walked
        match self.archive_type {
            ArchiveType::Tar => list_tar(reader, path),
            ArchiveType::TarGz => list_tar(GzDecoder::new(reader), path),
            ArchiveType::TarBz2 => list_tar(BzDecoder::new(reader), path),
            ArchiveType::Zip => Err(Error::UnsupportedArchive {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn list_tar<R: Read>(reader: R, archive_path: &Path) -> Result<Vec<ArchiveEntry>> {
    let mut archive = tar::Archive::new(reader);
    let mut entries = Vec::new();

    let members = archive
        .entries()
        .map_err(|e| Error::unreadable(archive_path, e))?;
    for member in members {
        let member = member.map_err(|e| Error::unreadable(archive_path, e))?;
        let header = member.header();

        let raw_path = member
            .path()
            .map_err(|e| Error::unreadable(archive_path, e))?
            .to_string_lossy()
            .into_owned();
        let Some(name) = member_name(&raw_path) else {
            continue;
        };

        let mut entry = if header.entry_type().is_dir() {
            ArchiveEntry::directory(name)
        } else {
            ArchiveEntry::file(name, header.size().unwrap_or(0))
        };
        if let Some(modified) = header.mtime().ok().and_then(mtime_to_naive) {
            entry = entry.with_modified(modified);
        }
        if let Ok(mode) = header.mode() {
            entry = entry.with_permissions(mode & 0o7777);
        }
        entries.push(entry);
    }

    Ok(entries)
}

/// Strip the `./` prefix tar adds when archiving `.`; `None` for the root itself
fn member_name(raw: &str) -> Option<&str> {
    let name = raw.strip_prefix("./").unwrap_or(raw);
    (!name.is_empty() && name != ".").then_some(name)
}

/// Tar stores UTC seconds; listings show local wall-clock time like zip does
fn mtime_to_naive(secs: u64) -> Option<NaiveDateTime> {
    let secs = i64::try_from(secs).ok()?;
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(&Local).naive_local())
}
