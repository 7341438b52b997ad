//! End-to-end listing tests against real archives written to a temp dir.
//!
//! Each test writes a zip (or tar) file, reads it back through the archive
//! readers and checks what `zipls` would print.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use zipls::config::{Config, FormatConfig};
use zipls::error::Error;
use zipls::ls;
use zipls::vfs::FilterOptions;

/// A zip member to write: trailing `/` marks a directory
struct Member<'a> {
    name: &'a str,
    data: &'a [u8],
    mode: u32,
}

fn file<'a>(name: &'a str, data: &'a [u8]) -> Member<'a> {
    Member {
        name,
        data,
        mode: 0o644,
    }
}

fn dir(name: &str) -> Member<'_> {
    Member {
        name,
        data: b"",
        mode: 0o755,
    }
}

/// Write a zip containing `members` in the given order
fn write_zip(tmp: &TempDir, name: &str, members: &[Member<'_>]) -> PathBuf {
    let path = tmp.path().join(name);
    let mut writer = zip::ZipWriter::new(File::create(&path).expect("create zip"));

    for member in members {
        let options = SimpleFileOptions::default().unix_permissions(member.mode);
        if member.name.ends_with('/') {
            writer
                .add_directory(member.name, options)
                .expect("add directory");
        } else {
            writer.start_file(member.name, options).expect("start file");
            writer.write_all(member.data).expect("write member");
        }
    }

    writer.finish().expect("finish zip");
    path
}

fn config_for(archive: &Path, paths: &[&str]) -> Config {
    Config {
        archive: archive.to_path_buf(),
        paths: paths.iter().map(|p| p.to_string()).collect(),
        hide_macosx: false,
        filter: FilterOptions::default(),
        format: FormatConfig {
            width: 80,
            now: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            ..Default::default()
        },
    }
}

/// Run the full pipeline and return (stderr lines, stdout lines)
fn run(config: &Config) -> (Vec<String>, Vec<String>) {
    let tree = ls::load_tree(config).expect("load tree");
    let report = ls::list(config.paths.as_slice(), &tree, config.filter);
    (
        ls::format::error_lines(&report, &config.archive),
        ls::format::render(&report, &config.format),
    )
}

// =============================================================================
// Directory semantics
// =============================================================================

#[test]
fn test_lists_directory_contents() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(
        &tmp,
        "docs.zip",
        &[dir("docs/"), file("docs/readme.txt", b"hello"), dir("docs/img/")],
    );

    let (errors, lines) = run(&config_for(&archive, &["docs"]));
    assert!(errors.is_empty());
    assert_eq!(lines, vec!["img        readme.txt"]);
}

#[test]
fn test_synthesizes_missing_directories() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(&tmp, "deep.zip", &[file("a/b/c.txt", b"c")]);

    let (_, root) = run(&config_for(&archive, &[]));
    assert_eq!(root, vec!["a"]);

    let (_, lines) = run(&config_for(&archive, &["a/b"]));
    assert_eq!(lines, vec!["c.txt"]);
}

#[test]
fn test_empty_directory_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(&tmp, "empty.zip", &[dir("empty/"), file("x.txt", b"x")]);

    let (errors, lines) = run(&config_for(&archive, &["empty/"]));
    assert!(errors.is_empty());
    assert!(lines.is_empty());
}

#[test]
fn test_hidden_entries_need_all_flag() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(&tmp, "hidden.zip", &[file(".env", b"k=v"), file("app.py", b"")]);

    let mut config = config_for(&archive, &[]);
    let (_, lines) = run(&config);
    assert_eq!(lines, vec!["app.py"]);

    config.filter.show_hidden = true;
    let (_, lines) = run(&config);
    assert_eq!(lines, vec![".env   app.py"]);
}

// =============================================================================
// Missing paths
// =============================================================================

#[test]
fn test_missing_path_reported_alongside_listing() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(&tmp, "site.zip", &[dir("docs/"), file("docs/readme.txt", b"r")]);

    let config = config_for(&archive, &["docs", "nope"]);
    let (errors, lines) = run(&config);
    assert_eq!(
        errors,
        vec![format!(
            "zipls: nope: No such file or directory in {}.",
            archive.display()
        )]
    );
    assert_eq!(lines, vec!["", "docs:", "readme.txt"]);
}

#[test]
fn test_unmatched_glob_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(&tmp, "site.zip", &[file("a.txt", b"a")]);

    let tree = ls::load_tree(&config_for(&archive, &[])).unwrap();
    let report = ls::list(&["*.md"], &tree, FilterOptions::default());
    assert!(matches!(&report.not_found[..], [Error::NotFound(p)] if p == "*.md"));
}

#[test]
fn test_unreadable_archive_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.zip");
    let err = ls::load_tree(&config_for(&missing, &[])).unwrap_err();
    assert!(matches!(err, Error::ArchiveUnreadable { .. }));
}

// =============================================================================
// Globbing
// =============================================================================

#[test]
fn test_glob_matches_several_directories() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(
        &tmp,
        "pets.zip",
        &[
            file("docs/a.txt", b""),
            file("dogs/rex.txt", b""),
            file("other/b.txt", b""),
        ],
    );

    let (_, lines) = run(&config_for(&archive, &["do*s"]));
    assert_eq!(lines, vec!["docs:", "a.txt", "", "dogs:", "rex.txt"]);
}

#[test]
fn test_glob_file_matches_use_full_path() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(
        &tmp,
        "src.zip",
        &[file("src/main.rs", b""), file("src/lib.rs", b""), file("src/notes.md", b"")],
    );

    let (_, lines) = run(&config_for(&archive, &["src/*.rs"]));
    assert_eq!(lines, vec!["src/lib.rs   src/main.rs"]);
}

#[test]
fn test_directory_flag_with_glob() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(
        &tmp,
        "pets.zip",
        &[dir("docs/"), dir("dogs/"), file("dots.txt", b"")],
    );

    let mut config = config_for(&archive, &["do*"]);
    config.filter.dirs_as_entries = true;
    config.format.classify = true;
    let (_, lines) = run(&config);
    assert_eq!(lines, vec!["docs/     dogs/     dots.txt"]);
}

// =============================================================================
// Archive quirks
// =============================================================================

#[test]
fn test_hide_macosx() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(
        &tmp,
        "finder.zip",
        &[
            dir("project/"),
            file("project/a.txt", b""),
            dir("__MACOSX/"),
            dir("__MACOSX/project/"),
            file("__MACOSX/project/._a.txt", b""),
        ],
    );

    let mut config = config_for(&archive, &[]);
    let (_, lines) = run(&config);
    assert_eq!(lines, vec!["__MACOSX  project"]);

    config.hide_macosx = true;
    let (_, lines) = run(&config);
    assert_eq!(lines, vec!["project"]);
}

#[test]
fn test_long_format_from_zip() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(
        &tmp,
        "long.zip",
        &[
            Member {
                name: "run.sh",
                data: b"#!/bin/sh\n",
                mode: 0o755,
            },
            file("data.bin", b"0123456789abcdef0123"),
        ],
    );

    let mut config = config_for(&archive, &[]);
    config.format.long = true;
    config.format.classify = true;
    let (_, lines) = run(&config);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("-rw-r--r-- 20 "));
    assert!(lines[0].ends_with(" data.bin"));
    assert!(lines[1].starts_with("-rwxr-xr-x 10 "));
    assert!(lines[1].ends_with(" run.sh*"));
}

#[test]
fn test_lists_tar_archive() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bundle.tar");

    let mut builder = tar::Builder::new(File::create(&path).unwrap());
    for (name, data) in [("bundle/a.txt", &b"a"[..]), ("bundle/sub/b.txt", &b"bb"[..])] {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_mtime(1_700_000_000);
        header.set_entry_type(tar::EntryType::Regular);
        header.set_cksum();
        builder.append_data(&mut header, name, data).unwrap();
    }
    builder.finish().unwrap();

    let (_, lines) = run(&config_for(&path, &["bundle"]));
    assert_eq!(lines, vec!["a.txt sub"]);
}
