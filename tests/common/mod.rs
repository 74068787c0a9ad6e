//! Common test utilities for trackersync integration tests

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory holding the local tracker file, an upstream copy and
/// an isolated user config directory
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("home"))
            .expect("Failed to create isolated home directory");
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write `trackers.json` with the given records
    pub fn write_local(&self, trackers: &serde_json::Value) {
        self.write_file("trackers.json", &tracker_doc(trackers));
    }

    /// Write `upstream.json` with the given records
    pub fn write_upstream(&self, trackers: &serde_json::Value) {
        self.write_file("upstream.json", &tracker_doc(trackers));
    }

    /// Parse `trackers.json` back into JSON
    pub fn read_local(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file("trackers.json")).expect("Local file is not JSON")
    }

    /// Names in `trackers.json`, in file order
    pub fn local_names(&self) -> Vec<String> {
        self.read_local()["trackers"]
            .as_array()
            .expect("trackers is not an array")
            .iter()
            .map(|t| t["Name"].as_str().expect("Name is not a string").to_string())
            .collect()
    }

    /// Isolated user config directory (what `dirs::config_dir` resolves to)
    pub fn user_config_dir(&self) -> PathBuf {
        self.path.join("home").join(".config")
    }

    /// trackersync command running inside this workspace
    pub fn cmd(&self) -> Command {
        trackersync_cmd_for_workspace(&self.path)
    }

    /// `trackersync sync --upstream-file upstream.json` inside this workspace
    pub fn sync_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["sync", "--upstream-file", "upstream.json"]);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize records into a `{"trackers": [...]}` document
pub fn tracker_doc(trackers: &serde_json::Value) -> String {
    serde_json::to_string_pretty(&serde_json::json!({ "trackers": trackers }))
        .expect("Failed to serialize tracker document")
}

/// trackersync command with developer environment overrides removed
#[allow(deprecated)]
pub fn trackersync_cmd_for_workspace(path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("trackersync").expect("Failed to find trackersync binary");
    cmd.current_dir(path);
    cmd.env_remove("TRACKERSYNC_CONFIG");
    cmd.env_remove("TRACKERSYNC_LOCAL");
    cmd.env_remove("TRACKERSYNC_UPSTREAM_URL");
    // keep dirs::config_dir() inside the workspace
    cmd.env("HOME", path.join("home"));
    cmd.env("XDG_CONFIG_HOME", path.join("home").join(".config"));
    cmd
}

/// Serve a single canned HTTP response on a loopback port; returns its URL
#[allow(dead_code)]
pub fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind loopback port");
    let addr = listener.local_addr().expect("Failed to read local address");
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/trackers.json")
}
