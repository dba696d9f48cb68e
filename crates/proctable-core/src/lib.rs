//! Proctable Core - headless process table acquisition.
//!
//! Reads the kernel's process-information directory and returns one
//! [`ProcessRecord`] per running process (pid, parent pid, name, command
//! line, environment). It has no HTTP layer of its own; see the
//! `proctable-http` crate for the JSON endpoint.
//!
//! # Example
//!
//! ```rust,no_run
//! use proctable_core::{ProcFs, ProcessTable, ScanOptions};
//!
//! fn main() -> proctable_core::Result<()> {
//!     let table = ProcessTable::new(ProcFs::new(), ScanOptions::default());
//!     for record in table.snapshot()? {
//!         println!("{} {}", record.pid(), record.name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod procfs;
pub mod reader;
pub mod record;
pub mod scan;

pub use config::{ProcConfig, ServerConfig};
pub use error::{ProcTableError, Result};
pub use options::{FailurePolicy, ScanOptions};
pub use procfs::{ProcFile, ProcFs, ProcSource};
pub use reader::read_process;
pub use record::{CommandLine, Environment, ProcessRecord};
pub use scan::{list_processes, ProcessTable};
