//! Command-line and environment configuration.

use clap::Parser;
use proctable_core::{FailurePolicy, ProcConfig, ScanOptions, ServerConfig};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "proctable-http")]
#[command(about = "Serve the process table as JSON over HTTP")]
pub struct Args {
    /// Port to listen on (unset or empty = 8888)
    #[arg(short, long, env = ServerConfig::PORT_ENV)]
    pub port: Option<String>,

    /// Host to bind to
    #[arg(long, env = "PROCTABLE_HOST", default_value = ServerConfig::DEFAULT_HOST)]
    pub host: String,

    /// Process-information directory to read
    #[arg(long, env = "PROCTABLE_PROC_ROOT", default_value = ProcConfig::DEFAULT_PROC_ROOT)]
    pub proc_root: PathBuf,

    /// What to do with a process that vanishes mid-scan (skip or abort)
    #[arg(long, env = "PROCTABLE_ON_ERROR", default_value = "skip")]
    pub on_error: FailurePolicy,

    /// Report unreadable command lines as `false` instead of dropping the process
    #[arg(long)]
    pub tolerate_cmdline_errors: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Listening port, falling back to the default when unset or empty.
    pub fn listen_port(&self) -> proctable_core::Result<u16> {
        ServerConfig::resolve_port(self.port.as_deref())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            on_error: self.on_error,
            tolerate_cmdline_errors: self.tolerate_cmdline_errors,
        }
    }
}
