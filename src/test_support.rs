//! Helpers shared by tests: process-wide locks and a stand-in `playerctl`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};

use tempfile::TempDir;

static PROCESS_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serializes tests that read or modify the process environment.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

/// Serializes tests that write scripts and spawn processes.
///
/// Executing a freshly written file while another thread forks can fail
/// with ETXTBSY, so both happen under this lock.
pub fn process_lock() -> MutexGuard<'static, ()> {
    PROCESS_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

/// A fake `playerctl` shell script living in its own temp dir.
///
/// Every invocation appends its arguments to `calls.log` next to the script.
pub struct FakePlayerctl {
    dir: TempDir,
    path: PathBuf,
}

impl FakePlayerctl {
    /// `body` is a POSIX shell snippet run after the call is logged; `$*`
    /// holds the arguments.
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playerctl");
        let log = dir.path().join("calls.log");
        let script = format!(
            "#!/bin/sh\necho \"$*\" >> '{}'\n{}\n",
            log.display(),
            body
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir, path }
    }

    /// A script that answers the three polling queries like a real player.
    pub fn playing(line: &str, length_micros: &str, position: &str) -> Self {
        Self::new(&format!(
            r#"case "$*" in
  *"metadata --format"*) printf '%s\n' '{line}' ;;
  *"metadata mpris:length"*) printf '%s\n' '{length_micros}' ;;
  *position*) printf '%s\n' '{position}' ;;
esac"#
        ))
    }

    pub fn binary(&self) -> String {
        self.path.display().to_string()
    }

    /// Argument lines of every call made so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
