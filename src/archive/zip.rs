use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::vfs::ArchiveEntry;

use super::ArchiveHandler;

/// Reads the central directory of a local zip file
#[derive(Debug, Default)]
pub struct ZipHandler;

impl ZipHandler {
    pub fn new() -> Self {
        ZipHandler
    }
}

impl ArchiveHandler for ZipHandler {
    fn read_entries(&self, path: &Path) -> Result<Vec<ArchiveEntry>> {
        let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
        let mut archive =
            ZipArchive::new(BufReader::new(file)).map_err(|e| Error::unreadable(path, e))?;

        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            // Raw access skips decompression; only the header is needed
            let member = archive
                .by_index_raw(i)
                .map_err(|e| Error::unreadable(path, e))?;

            let mut entry = if member.is_dir() {
                ArchiveEntry::directory(member.name())
            } else {
                ArchiveEntry::file(member.name(), member.size())
            };
            if let Some(modified) = member.last_modified().and_then(dos_to_naive) {
                entry = entry.with_modified(modified);
            }
            if let Some(mode) = member.unix_mode() {
                entry = entry.with_permissions(mode & 0o7777);
            }
            entries.push(entry);
        }

        Ok(entries)
    }
}

/// Convert a zip DOS timestamp (local wall-clock time) to a NaiveDateTime
fn dos_to_naive(dt: zip::DateTime) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(dt.year().into(), dt.month().into(), dt.day().into())?.and_hms_opt(
        dt.hour().into(),
        dt.minute().into(),
        dt.second().into(),
    )
}
