//! Access to the kernel's process-information directory.
//!
//! The core never touches the filesystem directly: everything goes through
//! [`ProcSource`], implemented for real by [`ProcFs`]. A `ProcFs` can be
//! rooted anywhere, so tests lay out a fake `/proc` in a temporary
//! directory.
//!
//! - `fs` - the directory-backed source and pid enumeration
//! - `parse` - parsers for `stat`, `cmdline` and `environ`

pub mod fs;
pub mod parse;

pub use fs::ProcFs;
pub use parse::{decode_cmdline, parse_environ, parse_stat, StatFields};

use crate::config::ProcConfig;
use crate::error::Result;
use std::io;

/// Per-process files read by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcFile {
    Stat,
    Cmdline,
    Environ,
}

impl ProcFile {
    /// File name inside `/proc/<pid>/`.
    pub fn file_name(self) -> &'static str {
        match self {
            ProcFile::Stat => ProcConfig::STAT_FILE,
            ProcFile::Cmdline => ProcConfig::CMDLINE_FILE,
            ProcFile::Environ => ProcConfig::ENVIRON_FILE,
        }
    }
}

/// Source of process-table data.
pub trait ProcSource: Send + Sync {
    /// Identifiers of all visible processes except the caller's own, in
    /// the order the underlying listing produces them.
    fn list_pids(&self) -> Result<Vec<u32>>;

    /// Raw contents of one per-process file.
    fn read_file(&self, pid: u32, file: ProcFile) -> io::Result<Vec<u8>>;
}
