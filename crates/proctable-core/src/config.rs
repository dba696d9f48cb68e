//! Centralized configuration constants.

use crate::error::{ProcTableError, Result};

/// Process directory configuration.
pub struct ProcConfig;

impl ProcConfig {
    pub const DEFAULT_PROC_ROOT: &'static str = "/proc";
    pub const STAT_FILE: &'static str = "stat";
    pub const CMDLINE_FILE: &'static str = "cmdline";
    pub const ENVIRON_FILE: &'static str = "environ";
}

/// HTTP endpoint configuration.
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8888;
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const PORT_ENV: &'static str = "PORT";
    pub const CONTENT_TYPE_JSON: &'static str = "application/json; charset=utf-8";
    pub const CONTENT_TYPE_TEXT: &'static str = "text/plain; charset=utf-8";

    /// Resolve the listening port from the raw value of the port variable.
    ///
    /// Unset and empty both mean [`Self::DEFAULT_PORT`].
    pub fn resolve_port(raw: Option<&str>) -> Result<u16> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::DEFAULT_PORT),
            Some(value) => value.parse().map_err(|e| ProcTableError::Config {
                message: format!("invalid {} value '{}': {}", Self::PORT_ENV, value, e),
            }),
        }
    }
}
