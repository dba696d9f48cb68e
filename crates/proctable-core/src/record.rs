//! Process records as they are served to callers.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Environment variables of one process, ordered by name.
pub type Environment = BTreeMap<String, String>;

/// Command line of a process.
///
/// `Absent` means the command line could not be read at all and serializes
/// as JSON `false`. `Present("")` is a readable but empty command line
/// (typical of kernel threads) and serializes as `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    Present(String),
    Absent,
}

impl CommandLine {
    /// The command line text, if one was read.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CommandLine::Present(s) => Some(s),
            CommandLine::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CommandLine::Absent)
    }
}

impl Serialize for CommandLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CommandLine::Present(s) => serializer.serialize_str(s),
            CommandLine::Absent => serializer.serialize_bool(false),
        }
    }
}

/// One process snapshot, taken at read time and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    #[serde(rename = "Pid")]
    pid: u32,
    #[serde(rename = "Ppid")]
    ppid: i32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Cmdline")]
    cmdline: CommandLine,
    /// `None` when the environment was unreadable; serializes as `null`.
    #[serde(rename = "Environ")]
    environ: Option<Environment>,
}

impl ProcessRecord {
    pub fn new(
        pid: u32,
        ppid: i32,
        name: impl Into<String>,
        cmdline: CommandLine,
        environ: Option<Environment>,
    ) -> Self {
        Self {
            pid,
            ppid,
            name: name.into(),
            cmdline,
            environ,
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn ppid(&self) -> i32 {
        self.ppid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cmdline(&self) -> &CommandLine {
        &self.cmdline
    }

    pub fn environ(&self) -> Option<&Environment> {
        self.environ.as_ref()
    }
}
