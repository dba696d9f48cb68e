//! Options that control an acquisition pass.

use crate::error::{ProcTableError, Result};
use std::fmt;
use std::str::FromStr;

/// What to do when a single process cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Drop the process and keep scanning.
    #[default]
    Skip,
    /// Fail the whole pass with the first per-process error.
    Abort,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Skip => "skip",
            FailurePolicy::Abort => "abort",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = ProcTableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(FailurePolicy::Skip),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(ProcTableError::Config {
                message: format!("unknown failure policy '{}' (expected skip or abort)", other),
            }),
        }
    }
}

/// Options for an acquisition pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub on_error: FailurePolicy,
    /// Report an unreadable `cmdline` as absent instead of failing the pid.
    pub tolerate_cmdline_errors: bool,
}
