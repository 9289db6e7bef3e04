//! Command-line integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const H264_PROBE: &str = r#"{
    "streams": [
        { "index": 0, "codec_type": "video", "codec_name": "h264", "disposition": { "attached_pic": 0 } },
        { "index": 1, "codec_type": "audio", "codec_name": "aac" },
        { "index": 2, "codec_type": "video", "codec_name": "png", "disposition": { "attached_pic": 1 } }
    ]
}"#;

const HEVC_PROBE: &str = r#"{ "streams": [ { "codec_type": "video", "codec_name": "hevc" } ] }"#;

/// Planner binary with a clean option environment
fn planner() -> Command {
    let mut cmd = Command::cargo_bin("nvenc-plan").unwrap();
    for (key, _) in std::env::vars() {
        if key.starts_with("NVENC_PLAN_") {
            cmd.env_remove(key);
        }
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_plan_prints_log_and_arguments() {
    let dir = TempDir::new().unwrap();
    let probe = write_file(dir.path(), "movie.json", H264_PROBE);

    planner()
        .args(["plan", "--probe"])
        .arg(&probe)
        .assert()
        .success()
        .stdout(predicate::str::contains("Codec: h264 → hevc (NVENC)"))
        .stdout(predicate::str::contains("hevc_nvenc"))
        .stdout(predicate::str::contains("Output container: .mkv"));
}

#[test]
fn test_plan_json_response() {
    let dir = TempDir::new().unwrap();
    let probe = write_file(dir.path(), "movie.json", H264_PROBE);

    let output = planner()
        .args(["plan", "--json", "--remove-images", "true", "--probe"])
        .arg(&probe)
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["processFile"], true);
    assert_eq!(response["container"], ".mkv");
    assert_eq!(response["FFmpegMode"], true);
    let preset = response["preset"].as_str().unwrap();
    assert!(preset.contains("-map 0:v:0 -map 0:a -map 0:s?"));
}

#[test]
fn test_plan_skip_outcome_exits_successfully() {
    let dir = TempDir::new().unwrap();
    let probe = write_file(dir.path(), "hevc.json", HEVC_PROBE);

    planner()
        .args(["plan", "--json", "--probe"])
        .arg(&probe)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"processFile\": false"))
        .stdout(predicate::str::contains("already HEVC encoded"));
}

#[test]
fn test_plan_reads_stdin() {
    planner()
        .args(["plan", "--probe", "-"])
        .write_stdin("null")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stream information found"));
}

#[test]
fn test_config_file_and_flag_precedence() {
    let dir = TempDir::new().unwrap();
    let probe = write_file(dir.path(), "movie.json", H264_PROBE);
    let config = write_file(
        dir.path(),
        "planner.toml",
        "[options]\ntarget_cqp = 26\noutput_container = \"mp4\"\n",
    );

    planner()
        .args(["plan", "--target-cqp", "19", "--config"])
        .arg(&config)
        .arg("--probe")
        .arg(&probe)
        .assert()
        .success()
        .stdout(predicate::str::contains("CQP: 19"))
        .stdout(predicate::str::contains("Container: mp4"));
}

#[test]
fn test_environment_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let probe = write_file(dir.path(), "movie.json", H264_PROBE);
    let config = write_file(dir.path(), "planner.yaml", "rc_lookahead: 10\n");

    planner()
        .env("NVENC_PLAN_RC_LOOKAHEAD", "16")
        .env("NVENC_PLAN_CONFIG", &config)
        .args(["plan", "--probe"])
        .arg(&probe)
        .assert()
        .success()
        .stdout(predicate::str::contains("RC Lookahead: 16 frames"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let probe = write_file(dir.path(), "movie.json", H264_PROBE);
    let config = write_file(dir.path(), "planner.ini", "target_cqp=20");

    planner()
        .args(["plan", "--config"])
        .arg(&config)
        .arg("--probe")
        .arg(&probe)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported config format"));
}

#[test]
fn test_missing_probe_file_fails() {
    planner()
        .args(["plan", "--probe", "/nonexistent/probe.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read probe data"));
}

#[test]
fn test_inspect_json() {
    let dir = TempDir::new().unwrap();
    let probe = write_file(dir.path(), "movie.json", H264_PROBE);

    let output = planner()
        .args(["inspect", "--json", "--probe"])
        .arg(&probe)
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["video_streams"], 2);
    assert_eq!(summary["attached_pictures"], 1);
    assert_eq!(summary["first_video_codec"], "h264");
}

#[test]
fn test_details_json() {
    planner()
        .args(["details", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Operation\": \"Transcode\""))
        .stdout(predicate::str::contains("\"name\": \"watermark_position\""));
}

#[test]
fn test_defaults_yaml() {
    planner()
        .args(["defaults", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("target_cqp: 23"))
        .stdout(predicate::str::contains("watermark_position: bottom_left"));
}

#[test]
fn test_batch_emits_one_line_per_probe() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.json", H264_PROBE);
    write_file(dir.path(), "b.json", HEVC_PROBE);
    write_file(dir.path(), "c.json", "{ broken");
    write_file(dir.path(), "readme.txt", "not a probe");

    let output = planner()
        .args(["batch", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0]["file"].as_str().unwrap().ends_with("a.json"));
    assert_eq!(lines[0]["decision"]["processFile"], true);
    assert!(lines[1]["file"].as_str().unwrap().ends_with("b.json"));
    assert_eq!(lines[1]["decision"]["processFile"], false);
}
