use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use crate::config::{self, Config, FormatConfig};
use crate::vfs::FilterOptions;

#[derive(Parser, Debug)]
#[command(name = "zipls")]
#[command(version)]
#[command(about = "ls inside of a zip (or tar) archive", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipls site.zip                  list the top level of site.zip\n  \
  zipls -l site.zip 'docs/*.md'   long listing of matching entries\n  \
  zipls -d site.zip 'do*'         list matching directories themselves")]
pub struct Cli {
    /// Path to the archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Paths inside the archive, relative to its top level; may contain * ? [..]
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Do not ignore entries starting with .
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Colorize the output
    #[arg(long)]
    pub color: bool,

    /// Append indicator (one of */) to entries
    #[arg(short = 'F', long)]
    pub classify: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// List directories themselves, not their contents
    #[arg(short = 'd', long)]
    pub directory: bool,

    /// Print sizes in human readable units in the long format
    #[arg(long)]
    pub human_readable: bool,

    /// Hide the macOS __MACOSX folder and its descendants (not an ls option)
    #[arg(long, alias = "hide_macosx")]
    pub hide_macosx: bool,
}

impl Cli {
    /// Resolve flags and the runtime environment into a [`Config`].
    pub fn into_config(self) -> Config {
        Config {
            archive: self.archive,
            paths: self.paths,
            hide_macosx: self.hide_macosx,
            filter: FilterOptions {
                show_hidden: self.all,
                dirs_as_entries: self.directory,
            },
            format: FormatConfig {
                width: config::detect_width(),
                long: self.long,
                classify: self.classify,
                color: self.color,
                human_readable: self.human_readable,
                now: Local::now().naive_local(),
            },
        }
    }
}
