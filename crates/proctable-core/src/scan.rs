//! One acquisition pass over the whole process table.

use crate::error::Result;
use crate::options::{FailurePolicy, ScanOptions};
use crate::procfs::{ProcFs, ProcSource};
use crate::reader::read_process;
use crate::record::ProcessRecord;
use tracing::{debug, warn};

/// List every process record visible through `source`.
///
/// Pids are enumerated once and read once each; the result keeps the
/// enumeration order. Enumeration failure always fails the pass.
pub fn list_processes<S>(source: &S, options: &ScanOptions) -> Result<Vec<ProcessRecord>>
where
    S: ProcSource + ?Sized,
{
    let pids = source.list_pids()?;
    let mut records = Vec::with_capacity(pids.len());
    let mut skipped = 0usize;

    for pid in pids {
        match read_process(source, pid, options) {
            Ok(record) => records.push(record),
            Err(e) if e.is_per_process() && options.on_error == FailurePolicy::Skip => {
                debug!("Skipping process {}: {}", pid, e);
                skipped += 1;
            }
            Err(e) => {
                warn!("Process scan aborted: {}", e);
                return Err(e);
            }
        }
    }

    debug!(
        "Process scan complete: {} records, {} skipped",
        records.len(),
        skipped
    );
    Ok(records)
}

/// A process source paired with the options used to scan it.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable<S = ProcFs> {
    source: S,
    options: ScanOptions,
}

impl<S: ProcSource> ProcessTable<S> {
    pub fn new(source: S, options: ScanOptions) -> Self {
        Self { source, options }
    }

    /// Run a fresh acquisition pass.
    pub fn snapshot(&self) -> Result<Vec<ProcessRecord>> {
        list_processes(&self.source, &self.options)
    }
}
