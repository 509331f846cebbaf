//! Runtime abstraction for output side effects.
//!
//! Commands write through this trait so that they can be tested without
//! touching the file system or the terminal.
//!
//! - `fs` - file writes and directory creation
//! - `console` - standard output

mod console;
mod fs;

use anyhow::Result;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    // Console
    /// Write `text` to standard output as is.
    fn print(&self, text: &str) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn print(&self, text: &str) -> Result<()> {
        self.print_impl(text)
    }
}
