use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use assert_cmd::Command;
use tempfile::TempDir;

use dexview_types::Snapshot;

/// An isolated data directory plus a way to run the binary against it.
///
/// Every world gets its own temp dir, and `command` pins the invocation to
/// it, so tests never read the developer's real data directory.
pub struct TestWorld {
    root: TempDir,
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn snapshot_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    /// Write a typed snapshot as `data/<user>.json`.
    pub fn write_snapshot(&self, user: &str, snapshot: &Snapshot) -> PathBuf {
        std::fs::create_dir_all(self.snapshot_dir()).expect("create data dir");
        let path = self.snapshot_dir().join(format!("{user}.json"));
        let json = serde_json::to_string_pretty(snapshot).expect("serialize snapshot");
        std::fs::write(&path, json).expect("write snapshot");
        path
    }

    /// Write raw content at a path relative to the data directory.
    pub fn write_raw(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// Run `dexview` with the isolation flags prepended.
    pub fn run(&self, args: &[&str]) -> CliResult {
        let mut cmd = self.command();
        cmd.args(args);
        let output = cmd.output().expect("run dexview");
        CliResult::from_output(output)
    }

    /// A bare command pointed at this world; callers add their own args.
    pub fn command(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("dexview").expect("binary builds");
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--no-color")
            .env_remove("DEXVIEW_PATH")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured output of one CLI invocation.
pub struct CliResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    fn from_output(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON, failing the test with the raw output attached.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|err| panic!("stdout is not JSON ({err}):\n{}", self.stdout))
    }
}
