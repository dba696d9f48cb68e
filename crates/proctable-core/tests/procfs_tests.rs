//! Integration tests for process table acquisition.
//!
//! These tests lay out a fake `/proc` tree in a temporary directory and run
//! full acquisition passes against it.

use proctable_core::{
    list_processes, CommandLine, FailurePolicy, ProcFs, ProcTableError, ProcessRecord,
    ProcessTable, ScanOptions,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Pid used as "our own" process inside fake trees.
const FAKE_SELF_PID: u32 = 4242;

fn write_process(root: &Path, pid: u32, stat: &str, cmdline: Option<&[u8]>, environ: Option<&[u8]>) {
    let dir = root.join(pid.to_string());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("stat"), stat).unwrap();
    if let Some(cmdline) = cmdline {
        fs::write(dir.join("cmdline"), cmdline).unwrap();
    }
    if let Some(environ) = environ {
        fs::write(dir.join("environ"), environ).unwrap();
    }
}

/// Create a fake process directory with a handful of typical entries.
fn create_test_env() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    write_process(
        root,
        1,
        "1 (systemd) S 0 1 1 0 -1 4194560\n",
        Some(b"/sbin/init\0splash\0"),
        Some(b"HOME=/\0TERM=linux\0"),
    );
    write_process(root, 2, "2 (kthreadd) S 0 0 0 0 -1\n", Some(b""), Some(b""));
    write_process(
        root,
        310,
        "310 (my process) R 1 310 310 0 -1\n",
        Some(b"ls\0-la\0"),
        Some(b"A=1\0B=\0=IGNORED\0C"),
    );
    // environ unreadable (owned by another user on a real system)
    write_process(root, 311, "311 (sshd) S 1 311 311\n", Some(b"sshd\0"), None);
    write_process(
        root,
        FAKE_SELF_PID,
        "4242 (proctable) S 1 4242 4242\n",
        Some(b"proctable\0"),
        Some(b""),
    );

    fs::create_dir_all(root.join("self")).unwrap();
    fs::create_dir_all(root.join("sys")).unwrap();
    fs::write(root.join("meminfo"), "MemTotal: 1 kB\n").unwrap();
    fs::write(root.join("uptime"), "1.0 1.0\n").unwrap();

    temp_dir
}

fn table_for(root: &Path, options: ScanOptions) -> ProcessTable {
    ProcessTable::new(ProcFs::with_root(root).with_self_pid(FAKE_SELF_PID), options)
}

fn find(records: &[ProcessRecord], pid: u32) -> &ProcessRecord {
    records
        .iter()
        .find(|r| r.pid() == pid)
        .unwrap_or_else(|| panic!("pid {} missing from snapshot", pid))
}

#[test]
fn test_snapshot_reads_every_process() {
    let temp_dir = create_test_env();
    let records = table_for(temp_dir.path(), ScanOptions::default())
        .snapshot()
        .unwrap();

    let pids: HashSet<u32> = records.iter().map(|r| r.pid()).collect();
    assert_eq!(pids, HashSet::from([1, 2, 310, 311]));

    let init = find(&records, 1);
    assert_eq!(init.name(), "systemd");
    assert_eq!(init.ppid(), 0);
    assert_eq!(init.cmdline().as_str(), Some("/sbin/init splash"));
    assert_eq!(init.environ().unwrap()["TERM"], "linux");
}

#[test]
fn test_snapshot_excludes_own_pid() {
    let temp_dir = create_test_env();
    let records = table_for(temp_dir.path(), ScanOptions::default())
        .snapshot()
        .unwrap();
    assert!(records.iter().all(|r| r.pid() != FAKE_SELF_PID));
}

#[test]
fn test_name_with_space_and_cmdline_decoding() {
    let temp_dir = create_test_env();
    let records = table_for(temp_dir.path(), ScanOptions::default())
        .snapshot()
        .unwrap();

    let record = find(&records, 310);
    assert_eq!(record.name(), "my process");
    assert_eq!(record.ppid(), 1);
    assert_eq!(record.cmdline(), &CommandLine::Present("ls -la".into()));
}

#[test]
fn test_serialized_fields() {
    let temp_dir = create_test_env();
    let records = table_for(temp_dir.path(), ScanOptions::default())
        .snapshot()
        .unwrap();

    let kthread = serde_json::to_value(find(&records, 2)).unwrap();
    assert_eq!(kthread["Cmdline"], json!(""));
    assert_eq!(kthread["Environ"], json!({}));

    let custom = serde_json::to_value(find(&records, 310)).unwrap();
    assert_eq!(custom["Environ"], json!({"A": "1", "B": "", "C": ""}));

    let sshd = serde_json::to_value(find(&records, 311)).unwrap();
    assert_eq!(sshd["Environ"], Value::Null);
}

#[test]
fn test_consecutive_passes_match() {
    let temp_dir = create_test_env();
    let table = table_for(temp_dir.path(), ScanOptions::default());

    let first: HashSet<u32> = table.snapshot().unwrap().iter().map(|r| r.pid()).collect();
    let second: HashSet<u32> = table.snapshot().unwrap().iter().map(|r| r.pid()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_denied_cmdline_skips_process() {
    let temp_dir = create_test_env();
    write_process(temp_dir.path(), 900, "900 (zombie) Z 1 0 0\n", None, None);

    let records = table_for(temp_dir.path(), ScanOptions::default())
        .snapshot()
        .unwrap();
    assert!(records.iter().all(|r| r.pid() != 900));
    assert_eq!(records.len(), 4);
}

#[test]
fn test_denied_cmdline_aborts_under_abort_policy() {
    let temp_dir = create_test_env();
    write_process(temp_dir.path(), 900, "900 (zombie) Z 1 0 0\n", None, None);

    let options = ScanOptions {
        on_error: FailurePolicy::Abort,
        ..ScanOptions::default()
    };
    let err = table_for(temp_dir.path(), options).snapshot().unwrap_err();
    assert!(matches!(
        err,
        ProcTableError::ProcessVanished { pid: 900, file: "cmdline", .. }
    ));
}

#[test]
fn test_denied_cmdline_tolerated_as_false() {
    let temp_dir = create_test_env();
    write_process(temp_dir.path(), 900, "900 (zombie) Z 1 0 0\n", None, None);

    let options = ScanOptions {
        tolerate_cmdline_errors: true,
        ..ScanOptions::default()
    };
    let records = table_for(temp_dir.path(), options).snapshot().unwrap();
    let value = serde_json::to_value(find(&records, 900)).unwrap();
    assert_eq!(value["Cmdline"], json!(false));
    assert_eq!(value["Environ"], Value::Null);
}

#[test]
fn test_unparseable_stat_skipped() {
    let temp_dir = create_test_env();
    write_process(temp_dir.path(), 901, "901 (bad) S notapid\n", Some(b"bad\0"), None);

    let records = table_for(temp_dir.path(), ScanOptions::default())
        .snapshot()
        .unwrap();
    assert!(records.iter().all(|r| r.pid() != 901));
}

#[test]
fn test_missing_proc_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let source = ProcFs::with_root(temp_dir.path().join("not-mounted"));

    let err = list_processes(&source, &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ProcTableError::Enumeration { .. }));
}

#[cfg(target_os = "linux")]
#[test]
fn test_real_proc_snapshot() {
    let records = ProcessTable::new(ProcFs::new(), ScanOptions::default())
        .snapshot()
        .unwrap();

    let own_pid = std::process::id();
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r.pid() != own_pid && r.pid() > 0));
}
