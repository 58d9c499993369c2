use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn ifmt() -> Command {
    Command::cargo_bin("ifmt").unwrap()
}

#[test]
fn test_between_full_default() {
    ifmt()
        .args(["between", "2026-03-13T17:00:00Z", "2026-03-16T09:00:00Z"])
        .assert()
        .success()
        .stdout("2 days, 16 hours\n");
}

#[test]
fn test_between_abbreviated_with_max_units() {
    ifmt()
        .args([
            "between",
            "2026-03-13T17:00:00Z",
            "2026-03-16T09:30:00Z",
            "--style",
            "abbreviated",
            "--max-units",
            "2",
        ])
        .assert()
        .success()
        .stdout("2d, 16h\n");
}

#[test]
fn test_between_positional_keeps_zeros() {
    ifmt()
        .args([
            "between",
            "2026-03-16T09:00:00Z",
            "2026-03-16T11:00:07Z",
            "--style",
            "positional",
            "--units",
            "h,m,s",
            "--zeros",
            "none",
        ])
        .assert()
        .success()
        .stdout("2:0:7\n");
}

#[test]
fn test_between_colloquial() {
    ifmt()
        .args([
            "between",
            "2026-02-01T00:00:00Z",
            "2026-02-22T00:00:00Z",
            "--style",
            "colloquial",
        ])
        .assert()
        .success()
        .stdout("3 weeks ago\n");
}

#[test]
fn test_between_colloquial_relevant_time_in_zone() {
    ifmt()
        .args([
            "between",
            "2026-03-14T05:30:00Z",
            "2026-03-16T06:00:00Z",
            "--style",
            "colloquial",
            "--relevant-time",
            "--timezone",
            "Asia/Tokyo",
        ])
        .assert()
        .success()
        .stdout("2 days ago (14:30)\n");
}

#[test]
fn test_ago_allow_now() {
    ifmt()
        .args(["ago", "120", "--style", "colloquial", "--allow-now"])
        .assert()
        .success()
        .stdout("just now\n");
}

#[test]
fn test_ago_negative_is_future() {
    ifmt()
        .args(["ago", "-7200", "--style", "colloquial"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("in "));
}

#[test]
fn test_zero_interval_prints_nothing() {
    ifmt()
        .args(["between", "2026-03-16T09:00:00Z", "2026-03-16T09:00:00Z"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_config_file_with_flag_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"style":"short","max_unit_count":1}}"#).unwrap();
    let path = file.path().to_str().unwrap();

    ifmt()
        .args([
            "between",
            "2026-03-13T17:00:00Z",
            "2026-03-16T09:00:00Z",
            "--config",
            path,
        ])
        .assert()
        .success()
        .stdout("2 days\n");

    ifmt()
        .args([
            "between",
            "2026-03-13T17:00:00Z",
            "2026-03-16T09:00:00Z",
            "--config",
            path,
            "--style",
            "full",
        ])
        .assert()
        .success()
        .stdout("2 days\n");
}

#[test]
fn test_bundle_overrides_strings() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"colloquial.past.hour.other": "{{0}} hrs back"}}"#).unwrap();

    ifmt()
        .args([
            "between",
            "2026-03-16T09:00:00Z",
            "2026-03-16T12:00:00Z",
            "--style",
            "colloquial",
            "--bundle",
            file.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("3 hrs back\n");
}

#[test]
fn test_invalid_timestamp_fails() {
    ifmt()
        .args(["between", "not-a-date", "2026-03-16T09:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid datetime"));
}

#[test]
fn test_invalid_style_fails() {
    ifmt()
        .args(["ago", "60", "--style", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown presentation style"));
}

#[test]
fn test_zero_max_units_fails() {
    ifmt()
        .args(["ago", "60", "--max-units", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}
