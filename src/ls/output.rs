//! Line output for listings with BrokenPipe handling.
//!
//! When the listing is piped into something like `head` that closes the pipe
//! early, printing stops quietly with `Ok(())` instead of erroring. Lines are
//! written whole, so an interrupt never leaves a partial line behind.

/// Print a line to stdout, handling BrokenPipe gracefully.
///
/// Returns `Ok(())` early if BrokenPipe is encountered.
/// Propagates other IO errors.
#[macro_export]
macro_rules! print_line {
    ($($arg:tt)*) => {{
        use std::io::Write;
        match writeln!(std::io::stdout().lock(), $($arg)*) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }};
}

/// Print a line to stderr, handling BrokenPipe gracefully.
#[macro_export]
macro_rules! eprint_line {
    ($($arg:tt)*) => {{
        use std::io::Write;
        match writeln!(std::io::stderr().lock(), $($arg)*) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }};
}

pub use eprint_line;
pub use print_line;
