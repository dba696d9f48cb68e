//! Error types for the process table.
//!
//! Errors fall in two groups: failures that make the whole snapshot
//! impossible (the process directory cannot be listed) and failures scoped
//! to a single pid (the process exited between listing and reading, or its
//! `stat` line could not be parsed). The scan pass uses
//! [`ProcTableError::is_per_process`] to tell them apart.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for process table acquisition.
#[derive(Debug, Error)]
pub enum ProcTableError {
    #[error("Failed to read process directory {path:?}: {source}")]
    Enumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Process {pid} vanished: failed to read {file}: {source}")]
    ProcessVanished {
        pid: u32,
        file: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {field} for process {pid}: {message}")]
    Parse {
        pid: u32,
        field: &'static str,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for process table operations.
pub type Result<T> = std::result::Result<T, ProcTableError>;

impl ProcTableError {
    /// Create a parse error for one field of one process.
    pub fn parse(pid: u32, field: &'static str, message: impl Into<String>) -> Self {
        ProcTableError::Parse {
            pid,
            field,
            message: message.into(),
        }
    }

    /// True for failures that only affect a single pid's record.
    pub fn is_per_process(&self) -> bool {
        matches!(
            self,
            ProcTableError::ProcessVanished { .. } | ProcTableError::Parse { .. }
        )
    }

    /// The pid this error belongs to, if it is scoped to one process.
    pub fn pid(&self) -> Option<u32> {
        match self {
            ProcTableError::ProcessVanished { pid, .. } | ProcTableError::Parse { pid, .. } => {
                Some(*pid)
            }
            _ => None,
        }
    }
}
