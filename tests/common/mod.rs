use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Fresh scratch directory per test, unique across parallel test threads.
pub fn scratch_dir(name: &str) -> PathBuf {
    let id = NEXT_DIR.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("hexcmp_{name}_{}_{id}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write `records` as `name` inside `dir` and return its path.
pub fn hex_fixture(dir: &Path, name: &str, records: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, records).unwrap();
    path
}

/// Outcome of one `hexcmp` invocation with both streams decoded.
pub struct Run {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Run {
    pub fn expect_ok(&self) -> &str {
        assert_eq!(self.code, Some(0), "hexcmp failed: {}", self.stderr);
        &self.stdout
    }
}

pub fn run_hexcmp<S: AsRef<OsStr>>(args: &[S]) -> Run {
    let output = Command::new(env!("CARGO_BIN_EXE_hexcmp"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    Run {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
