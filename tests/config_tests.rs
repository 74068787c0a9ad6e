//! Config file discovery and precedence through the binary

mod common;

use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_config_in_working_directory() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "trackersync.yaml",
        "local_path: data/trackers.json\nupstream_file: upstream.json\n",
    );
    workspace.write_file("data/trackers.json", r#"{"trackers":[]}"#);
    workspace.write_upstream(&json!([{"Name": "Y"}]));

    workspace
        .cmd()
        .arg("sync")
        .assert()
        .success()
        .stdout("Sync complete. Updated: 0, Added: 1\n");

    assert!(workspace.read_file("data/trackers.json").contains("\"Y\""));
}

#[test]
fn test_explicit_config_flag() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "conf/custom.yaml",
        "upstream_file: upstream.json\nexcluded_fields:\n  - Notes\n",
    );
    workspace.write_local(&json!([
        {"Name": "X", "Updated": "2020-01-01", "Notes": "mine", "Observatory Grade": "B"}
    ]));
    workspace.write_upstream(&json!([
        {"Name": "X", "Updated": "2021-01-01", "Notes": "theirs", "Observatory Grade": "A"}
    ]));

    workspace
        .cmd()
        .args(["sync", "--config", "conf/custom.yaml"])
        .assert()
        .success();

    // configured list replaces the built-in default
    let local = workspace.read_local();
    assert_eq!(local["trackers"][0]["Notes"], "mine");
    assert_eq!(local["trackers"][0]["Observatory Grade"], "A");
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_directory() {
    let workspace = common::TestWorkspace::new();
    let user_config = workspace.user_config_dir().join("trackersync/config.yaml");
    std::fs::create_dir_all(user_config.parent().unwrap()).unwrap();
    std::fs::write(&user_config, "upstream_file: upstream.json\n").unwrap();
    workspace.write_local(&json!([]));
    workspace.write_upstream(&json!([{"Name": "Y"}]));

    workspace
        .cmd()
        .arg("sync")
        .assert()
        .success()
        .stdout("Sync complete. Updated: 0, Added: 1\n");
}

#[test]
fn test_flags_override_config() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("trackersync.yaml", "upstream_file: missing.json\n");
    workspace.write_local(&json!([]));
    workspace.write_upstream(&json!([{"Name": "Y"}]));

    workspace
        .sync_cmd()
        .assert()
        .success()
        .stdout("Sync complete. Updated: 0, Added: 1\n");
}

#[test]
fn test_missing_explicit_config() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["sync", "--config", "nope.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_unknown_config_key_rejected() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("trackersync.yaml", "local_file: trackers.json\n");

    workspace
        .cmd()
        .arg("sync")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_config_with_url_and_file_rejected() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "trackersync.yaml",
        "upstream_url: https://example.invalid/t.json\nupstream_file: upstream.json\n",
    );

    workspace
        .cmd()
        .arg("sync")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}
