//! CLI integration tests.
//!
//! These run the built `aturi` binary and inspect its output.

mod common;

use common::{run_cli_failure, run_cli_success};
use serde_json::{Value, json};

const POST: &str = "at://did:plc:z72i7hdynmk6r22z27h6tvur/app.bsky.feed.post/3jui7kd54zh2y";

#[test]
fn test_parse_fields() {
    let stdout = run_cli_success(&["uri", "parse", POST]);
    assert!(stdout.contains(POST));
    assert!(stdout.contains("did:plc:z72i7hdynmk6r22z27h6tvur"));
    assert!(stdout.contains("app.bsky.feed.post"));
    assert!(stdout.contains("3jui7kd54zh2y"));
}

#[test]
fn test_parse_json() {
    let stdout = run_cli_success(&["uri", "parse", POST, "--json"]);
    let value: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(
        value,
        json!({
            "uri": POST,
            "authority": "did:plc:z72i7hdynmk6r22z27h6tvur",
            "collection": "app.bsky.feed.post",
            "rkey": "3jui7kd54zh2y"
        })
    );
}

#[test]
fn test_parse_relative_with_base() {
    let stdout = run_cli_success(&[
        "uri",
        "parse",
        "com.example.thing",
        "--base",
        "at://a.example",
        "--json",
    ]);
    let value: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["uri"], "at://a.example/com.example.thing");
    assert_eq!(value["rkey"], "");
}

#[test]
fn test_parse_relative_keeps_base_rkey() {
    let stdout = run_cli_success(&[
        "uri",
        "parse",
        "com.other",
        "--base",
        "at://a.example/com.example/rk",
        "--json",
    ]);
    let value: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["uri"], "at://a.example/com.other/rk");
}

#[test]
fn test_parse_without_authority() {
    let stderr = run_cli_failure(&["uri", "parse", "at://"]);
    assert!(stderr.contains("no authority"), "stderr: {stderr}");
}

#[test]
fn test_parse_skips_empty_parts() {
    let stdout = run_cli_success(&["uri", "parse", "at://alice.test"]);
    assert!(stdout.contains("at://alice.test"));
    assert!(!stdout.contains("Collection"));
    assert!(!stdout.contains("Rkey"));
}

#[test]
fn test_parse_rejects_wrong_scheme() {
    let stderr = run_cli_failure(&["uri", "parse", "http://example.com/x"]);
    assert!(stderr.contains("at://"), "stderr: {stderr}");
}

#[test]
fn test_check() {
    let stdout = run_cli_success(&["uri", "check", POST]);
    assert!(stdout.contains("resolves"));

    run_cli_failure(&["uri", "check", "at://a/b/c/d"]);
    run_cli_failure(&["uri", "check", "x/y/z", "--base", "at://a.example"]);
}

#[test]
fn test_soft_ref() {
    let stdout = run_cli_success(&["uri", "soft-ref", POST]);
    let value: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(
        value,
        json!({
            "repo": "did:plc:z72i7hdynmk6r22z27h6tvur",
            "collection": "app.bsky.feed.post",
            "rkey": "3jui7kd54zh2y"
        })
    );
}

#[test]
fn test_rkey() {
    let stdout = run_cli_success(&["rkey", "self", "3jui7kd54zh2y"]);
    assert!(stdout.contains("self"));

    let stderr = run_cli_failure(&["rkey", "self", "a/b"]);
    assert!(stderr.contains("1 of 2"), "stderr: {stderr}");
}

#[test]
fn test_version() {
    let stdout = run_cli_success(&["--version"]);
    assert!(stdout.starts_with(&format!("aturi {}", env!("CARGO_PKG_VERSION"))));
}
