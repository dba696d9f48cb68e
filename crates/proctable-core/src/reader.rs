//! Reading one process into a [`ProcessRecord`].

use crate::error::{ProcTableError, Result};
use crate::options::ScanOptions;
use crate::procfs::{decode_cmdline, parse_environ, parse_stat, ProcFile, ProcSource};
use crate::record::{CommandLine, ProcessRecord};
use tracing::trace;

/// Read and parse the `stat`, `cmdline` and `environ` files of `pid`.
///
/// A `stat` or `cmdline` read failure means the process is gone and is
/// returned as [`ProcTableError::ProcessVanished`]; with
/// `tolerate_cmdline_errors` the command line degrades to
/// [`CommandLine::Absent`] instead. An unreadable `environ` never fails the
/// read and leaves the environment as `None`.
pub fn read_process<S>(source: &S, pid: u32, options: &ScanOptions) -> Result<ProcessRecord>
where
    S: ProcSource + ?Sized,
{
    let stat_bytes = source
        .read_file(pid, ProcFile::Stat)
        .map_err(|e| vanished(pid, ProcFile::Stat, e))?;
    let stat = parse_stat(pid, &String::from_utf8_lossy(&stat_bytes))?;

    let cmdline = match source.read_file(pid, ProcFile::Cmdline) {
        Ok(bytes) => CommandLine::Present(decode_cmdline(&bytes)),
        Err(e) if options.tolerate_cmdline_errors => {
            trace!("cmdline unavailable for {}: {}", pid, e);
            CommandLine::Absent
        }
        Err(e) => return Err(vanished(pid, ProcFile::Cmdline, e)),
    };

    let environ = match source.read_file(pid, ProcFile::Environ) {
        Ok(bytes) => Some(parse_environ(&bytes)),
        Err(e) => {
            trace!("environ unavailable for {}: {}", pid, e);
            None
        }
    };

    Ok(ProcessRecord::new(pid, stat.ppid, stat.name, cmdline, environ))
}

fn vanished(pid: u32, file: ProcFile, source: std::io::Error) -> ProcTableError {
    ProcTableError::ProcessVanished {
        pid,
        file: file.file_name(),
        source,
    }
}
