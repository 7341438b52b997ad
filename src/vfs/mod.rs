pub mod filter;
pub mod glob;
pub mod node;
pub mod path;
pub mod resolver;

pub use filter::{FilterOptions, ListedEntry, Listing, filter};
pub use glob::GlobPattern;
pub use node::{ArchiveEntry, Node, build};
pub use path::ArchivePath;
pub use resolver::{expand, resolve};
