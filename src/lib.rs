//! `ls` for the inside of zip and tar archives.
//!
//! The archive's flat member list is rebuilt into a virtual directory tree
//! ([`vfs::build`]), path specifications with `*`, `?` and `[...]` wildcards
//! are expanded one segment at a time against it ([`vfs::expand`]), and each
//! concrete path is listed with traditional `ls` semantics ([`vfs::filter`]).

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod ls;
pub mod vfs;

pub use error::{Error, Result};
