//! Directory-backed process source.

use super::{ProcFile, ProcSource};
use crate::config::ProcConfig;
use crate::error::{ProcTableError, Result};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Process source reading a procfs-style directory.
#[derive(Debug, Clone)]
pub struct ProcFs {
    root: PathBuf,
    /// Pid left out of every listing.
    self_pid: u32,
}

impl ProcFs {
    /// Source rooted at `/proc`, excluding the current process.
    pub fn new() -> Self {
        Self::with_root(ProcConfig::DEFAULT_PROC_ROOT)
    }

    /// Source rooted at `root`, excluding the current process.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            self_pid: std::process::id(),
        }
    }

    /// Replace the pid excluded from listings.
    pub fn with_self_pid(mut self, pid: u32) -> Self {
        self.self_pid = pid;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn self_pid(&self) -> u32 {
        self.self_pid
    }

    fn file_path(&self, pid: u32, file: ProcFile) -> PathBuf {
        self.root.join(pid.to_string()).join(file.file_name())
    }
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a directory entry name as a pid.
///
/// Only non-empty all-digit names with a non-zero value qualify.
fn parse_pid_entry(name: &OsStr) -> Option<u32> {
    let name = name.to_str()?;
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<u32>().ok().filter(|&pid| pid > 0)
}

impl ProcSource for ProcFs {
    fn list_pids(&self) -> Result<Vec<u32>> {
        let entries = fs::read_dir(&self.root).map_err(|e| ProcTableError::Enumeration {
            path: self.root.clone(),
            source: e,
        })?;

        let mut pids = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    trace!("Skipping unreadable entry in {:?}: {}", self.root, e);
                    continue;
                }
            };
            match parse_pid_entry(&entry.file_name()) {
                Some(pid) if pid != self.self_pid => pids.push(pid),
                _ => {}
            }
        }

        debug!("Found {} processes under {:?}", pids.len(), self.root);
        Ok(pids)
    }

    fn read_file(&self, pid: u32, file: ProcFile) -> io::Result<Vec<u8>> {
        fs::read(self.file_path(pid, file))
    }
}
