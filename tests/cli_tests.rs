//! Binary-level tests for argument handling and exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn screvi() -> Command {
    let mut cmd = Command::cargo_bin("screvi").unwrap();
    cmd.env_remove("SCREVI_CONFIG")
        .env_remove("SCREVI_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_argument_exits_with_one() {
    let dir = TempDir::new().unwrap();
    screvi()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Provide path to video file."));
}

#[test]
fn test_nonexistent_video_exits_with_one() {
    let dir = TempDir::new().unwrap();
    screvi()
        .current_dir(dir.path())
        .arg("no-such-video.mp4")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_invalid_log_level_exits_with_one() {
    let dir = TempDir::new().unwrap();
    screvi()
        .current_dir(dir.path())
        .args(["--log-level", "loud", "video.mp4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid log level"));
}

#[test]
fn test_help_mentions_video_argument() {
    screvi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("VIDEO"));
}

#[test]
fn test_unreadable_config_exits_with_one() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("video.mp4"), b"not really a video").unwrap();
    screvi()
        .current_dir(dir.path())
        .args(["--config", "missing.toml", "video.mp4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("configuration"));
}

#[cfg(unix)]
#[test]
fn test_probe_failure_exits_with_one_before_generating() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("res")).unwrap();
    std::fs::write(dir.path().join("video.mp4"), b"not really a video").unwrap();

    screvi()
        .current_dir(dir.path())
        .env("SCREVI_FFPROBE", "false")
        .arg("video.mp4")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Generating Screenshots").not());

    assert_eq!(std::fs::read_dir(dir.path().join("res")).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("res")).unwrap();
    std::fs::write(dir.path().join("video.mp4"), b"not really a video").unwrap();
    std::fs::write(
        dir.path().join("screvi.toml"),
        "[tools]\nffprobe = \"false\"\ntimeout_secs = 10\n",
    )
    .unwrap();

    screvi()
        .current_dir(dir.path())
        .env_remove("SCREVI_FFPROBE")
        .arg("video.mp4")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("probe stage"));
}

/// Write an executable shell script standing in for an external tool
#[cfg(unix)]
fn tool_script(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Video file, `res/` and a fake ffprobe reporting 100 seconds
#[cfg(unix)]
fn hundred_second_workspace() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("res")).unwrap();
    std::fs::write(dir.path().join("video.mp4"), b"not really a video").unwrap();
    let ffprobe = tool_script(&dir, "fake-ffprobe", "echo 100.000000");
    (dir, ffprobe)
}

// ffmpeg is called as `-ss T -y -i IN -frames:v 1 OUT`
#[cfg(unix)]
const FFMPEG_WRITES_OUTPUT: &str = "for last; do :; done\nprintf 'png' > \"$last\"";

#[cfg(unix)]
#[test]
fn test_successful_run_exits_with_zero() {
    let (dir, ffprobe) = hundred_second_workspace();
    let ffmpeg = tool_script(&dir, "fake-ffmpeg", FFMPEG_WRITES_OUTPUT);

    screvi()
        .current_dir(dir.path())
        .env("SCREVI_FFPROBE", &ffprobe)
        .env("SCREVI_FFMPEG", &ffmpeg)
        .args(["--log-level", "warn", "video.mp4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duration: 00:01:40"))
        .stdout(predicate::str::contains("Processing screenshot 3 at 00:00:40"))
        .stdout(predicate::str::contains("Successfully generated all screenshots"));

    for index in 1..=3 {
        let output = dir.path().join(format!("res/output_{}.png", index));
        assert_eq!(std::fs::read(output).unwrap(), b"png");
    }
}

#[cfg(unix)]
#[test]
fn test_json_report_is_printed_after_success() {
    let (dir, ffprobe) = hundred_second_workspace();
    let ffmpeg = tool_script(&dir, "fake-ffmpeg", FFMPEG_WRITES_OUTPUT);

    let output = screvi()
        .current_dir(dir.path())
        .env("SCREVI_FFPROBE", &ffprobe)
        .env("SCREVI_FFMPEG", &ffmpeg)
        .args(["--log-level", "warn", "--json", "video.mp4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find("\n{").expect("JSON report on stdout") + 1;
    let report: serde_json::Value = serde_json::from_str(&stdout[start..]).unwrap();

    assert_eq!(report["video"]["duration_seconds"], 100.0);
    assert_eq!(report["plan"]["entries"][2]["formatted"], "00:00:40");
    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0]["size_bytes"], 3);
    assert_eq!(outcomes[0]["was_compressed"], false);
}

#[cfg(unix)]
#[test]
fn test_finished_screenshots_are_reported_before_a_failure() {
    let (dir, ffprobe) = hundred_second_workspace();
    let ffmpeg = tool_script(
        &dir,
        "fake-ffmpeg",
        &format!("[ \"$2\" = \"00:00:25\" ] && exit 1\n{}", FFMPEG_WRITES_OUTPUT),
    );

    let output = screvi()
        .current_dir(dir.path())
        .env("SCREVI_FFPROBE", &ffprobe)
        .env("SCREVI_FFMPEG", &ffmpeg)
        .args(["--log-level", "warn", "video.mp4"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Processing screenshot 1 at 00:00:10"));
    assert!(stdout.contains("Screenshot 1: res/output_1.png (3 bytes)"));
    assert!(stdout.contains("Processing screenshot 2 at 00:00:25"));
    assert!(!stdout.contains("Processing screenshot 3"));
    assert!(!stdout.contains("Successfully generated all screenshots"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let failure = "Failed to generate all screenshots: Screenshot 2 failed at extract stage";
    assert!(stderr.contains(failure));
    assert_eq!(stderr.matches("Screenshot 2 failed").count(), 1);

    assert!(dir.path().join("res/output_1.png").exists());
    assert!(!dir.path().join("res/output_3.png").exists());
}
